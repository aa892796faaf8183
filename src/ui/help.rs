use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Theme;

fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {key:<10}"),
            Style::default()
                .fg(Theme::selection_marker())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(description, Style::default().fg(Theme::text())),
    ])
}

pub fn build_help_text() -> Text<'static> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Keyboard Shortcuts",
        Style::default()
            .fg(Theme::accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "Workspace",
        Style::default()
            .fg(Theme::highlight())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(key_line("g", "Generate a fresh 5-color palette"));
    lines.push(key_line("n", "Edit the palette name"));
    lines.push(key_line("s / Enter", "Save the palette under the entered name"));
    lines.push(key_line("e", "Export the palette as palette.png"));
    lines.push(key_line("c", "Copy the selected color to the clipboard"));
    lines.push(key_line("←/→", "Select a color"));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "Saved palettes",
        Style::default()
            .fg(Theme::highlight())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(key_line("↑/↓", "Select a palette"));
    lines.push(key_line("←/→", "Select a color inside it"));
    lines.push(key_line("c", "Copy the selected color"));
    lines.push(key_line("d / Del", "Delete the selected palette"));
    lines.push(key_line("r", "Refresh from the store"));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "Everywhere",
        Style::default()
            .fg(Theme::highlight())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(key_line("Tab", "Switch between workspace and saved palettes"));
    lines.push(key_line("?", "Toggle this help screen"));
    lines.push(key_line("Esc", "Go back"));
    lines.push(key_line("q", "Quit"));

    Text::from(lines)
}
