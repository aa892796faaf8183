use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::helpers::{clamp_name, hex_to_color};
use super::theme::Theme;
use crate::app::{App, AppView};

/// The cached copy of the store's palette collection.
pub fn build_saved_text(app: &App) -> Text<'_> {
    let mut lines = Vec::new();

    if app.loading {
        lines.push(Line::from(Span::styled(
            "Loading...",
            Style::default().fg(Theme::warn()),
        )));
        lines.push(Line::from(""));
    }
    if let Some(error) = &app.error {
        lines.push(Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Theme::error()),
        )));
        lines.push(Line::from(""));
    }

    if app.saved_palettes.is_empty() {
        if !app.loading && app.error.is_none() {
            lines.push(Line::from(
                "No saved palettes yet. Save one from the workspace, or press 'r' to refresh.",
            ));
        }
        return Text::from(lines);
    }

    for (index, palette) in app.saved_palettes.iter().enumerate() {
        let selected = index == app.selected_saved_index && app.view == AppView::Saved;
        let marker_style = if selected {
            Style::default()
                .fg(Theme::selection_marker())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::dim())
        };
        let name_style = if selected {
            Style::default()
                .fg(Theme::highlight())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::text())
        };

        let mut spans = vec![
            Span::styled(if selected { "> " } else { "  " }, marker_style),
            Span::styled(clamp_name(&palette.name, 20), name_style),
            Span::raw("  "),
        ];
        for (color_index, color) in palette.colors.iter().enumerate() {
            let swatch_style = match hex_to_color(color) {
                Some(rgb) => Style::default().fg(rgb),
                None => Style::default().fg(Theme::dim()),
            };
            let picked = selected && color_index == app.selected_saved_color_index;
            spans.push(Span::styled(
                if picked { "▐██▌" } else { " ██ " },
                swatch_style,
            ));
        }
        if selected {
            if let Some(color) = palette.colors.get(app.selected_saved_color_index) {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    color.as_str(),
                    Style::default().fg(Theme::text()),
                ));
            }
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "↑/↓: pick a palette  ←/→: pick a color  c: copy  d: delete",
        Style::default().fg(Theme::dim()),
    )));

    Text::from(lines)
}
