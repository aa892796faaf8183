use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::helpers::hex_to_color;
use super::theme::Theme;
use crate::app::App;

const SWATCH: &str = "████████████";

/// The current working palette plus the name input.
pub fn build_workspace_text(app: &App) -> Text<'_> {
    let mut lines = Vec::new();

    let name_label_style = if app.name_input_active {
        Style::default()
            .fg(Theme::highlight())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Theme::dim())
    };
    let mut name_line = vec![Span::styled("Name: ", name_label_style)];
    if app.name_input.is_empty() && !app.name_input_active {
        name_line.push(Span::styled(
            "Enter palette name",
            Style::default().fg(Theme::dim()),
        ));
    } else {
        name_line.push(Span::styled(
            app.name_input.as_str(),
            Style::default().fg(Theme::text()),
        ));
    }
    if app.name_input_active {
        name_line.push(Span::styled("_", Style::default().fg(Theme::highlight())));
    }
    lines.push(Line::from(name_line));
    lines.push(Line::from(""));

    for (index, color) in app.palette.iter().enumerate() {
        let selected = index == app.selected_color_index;
        let marker_style = if selected {
            Style::default()
                .fg(Theme::selection_marker())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::dim())
        };
        let swatch_style = match hex_to_color(color) {
            Some(rgb) => Style::default().fg(rgb),
            None => Style::default().fg(Theme::dim()),
        };
        let mut label_style = Style::default().fg(Theme::text());
        if selected {
            label_style = label_style.add_modifier(Modifier::BOLD);
        }
        lines.push(Line::from(vec![
            Span::styled(if selected { "> " } else { "  " }, marker_style),
            Span::styled(SWATCH, swatch_style),
            Span::raw("  "),
            Span::styled(color.as_str(), label_style),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "←/→: pick a color  c: copy it  g: new palette",
        Style::default().fg(Theme::dim()),
    )));

    Text::from(lines)
}
