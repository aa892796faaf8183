mod help;
mod helpers;
mod saved;
mod theme;
mod workspace;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::{App, AppView};
use theme::Theme;

/// Renders the entire UI for a single frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (title, body_text) = match app.view {
        AppView::Workspace => (" Current Palette ", workspace::build_workspace_text(app)),
        AppView::Saved => (" Saved Palettes ", saved::build_saved_text(app)),
        AppView::Help => (" Help ", help::build_help_text()),
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    let header_lines = vec![Line::from(vec![
        Span::styled(
            "  Palettr  ",
            Style::default().fg(Color::Black).bg(Theme::primary()),
        ),
        Span::raw(" "),
        Span::styled(
            "color palette workspace",
            Style::default()
                .fg(Theme::secondary())
                .add_modifier(Modifier::BOLD),
        ),
    ])];
    let header = Paragraph::new(Text::from(header_lines))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary())),
        );
    frame.render_widget(header, layout[0]);

    let mut body_lines = vec![
        tabs_line(app),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {title}"),
            Style::default()
                .fg(Theme::accent())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    body_lines.extend(body_text.lines);
    body_lines.push(Line::from(""));
    body_lines.push(Line::from(Span::styled(
        "----------------------------------------",
        Style::default().fg(Theme::dim()),
    )));
    body_lines.extend(keybinds_lines(app));
    let body = Paragraph::new(Text::from(body_lines))
        .style(Style::default().fg(Theme::text()))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary())),
        );
    frame.render_widget(body, layout[1]);

    let footer = Paragraph::new(Text::from(status_line(app)))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary())),
        );
    frame.render_widget(footer, layout[2]);

    if let Some(toast) = app.toast_text() {
        render_toast(frame, toast);
    }
}

/// Toast overlay anchored to the top-right corner, above everything else.
fn render_toast(frame: &mut Frame, text: &str) {
    let area = frame.area();
    let width = (text.chars().count() as u16 + 4).min(area.width);
    let rect = Rect {
        x: area.width.saturating_sub(width + 2),
        y: 1,
        width,
        height: 3.min(area.height),
    };
    frame.render_widget(Clear, rect);
    let toast = Paragraph::new(Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Black).bg(Theme::toast())),
    );
    frame.render_widget(toast, rect);
}

fn tabs_line(app: &App) -> Line<'_> {
    let tabs = [
        ("Workspace", AppView::Workspace),
        ("Saved", AppView::Saved),
    ];

    let mut spans = Vec::new();
    for (index, (name, view)) in tabs.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if *view == app.view {
            Style::default()
                .fg(Color::Black)
                .bg(Theme::highlight())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::dim())
        };
        spans.push(Span::styled(format!(" {name} "), style));
    }

    Line::from(spans)
}

fn status_line(app: &App) -> Line<'_> {
    if let Some(error) = &app.error {
        return Line::from(Span::styled(
            format!("✗ {error}"),
            Style::default()
                .fg(Theme::error())
                .add_modifier(Modifier::BOLD),
        ));
    }
    if app.loading {
        return Line::from(Span::styled(
            "… Loading...",
            Style::default().fg(Theme::warn()),
        ));
    }
    Line::from(Span::styled(
        format!("● {} saved palettes", app.saved_palettes.len()),
        Style::default().fg(Theme::dim()),
    ))
}

fn keybinds_lines(app: &App) -> Vec<Line<'static>> {
    let (primary, secondary) = match app.view {
        AppView::Workspace => (
            "g: Generate  n: Name  s: Save  e: Export  c: Copy",
            "Tab: Saved  r: Refresh  ?: Help  q: Quit",
        ),
        AppView::Saved => (
            "↑/↓ ←/→: Select  c: Copy  d: Delete",
            "Tab: Workspace  r: Refresh  ?: Help  q: Quit",
        ),
        AppView::Help => ("Press ? or Esc to close this help screen", ""),
    };
    vec![
        Line::from(Span::styled(primary, Style::default().fg(Theme::dim()))),
        Line::from(Span::styled(secondary, Style::default().fg(Theme::dim()))),
    ]
}
