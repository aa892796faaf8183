use ratatui::style::Color;

pub fn clamp_name(value: &str, width: usize) -> String {
    let value_len = value.chars().count();
    if value_len <= width {
        return format!("{value:<width$}", width = width);
    }
    let trimmed = value
        .chars()
        .take(width.saturating_sub(2))
        .collect::<String>();
    format!("{trimmed}..")
}

pub fn hex_to_color(value: &str) -> Option<Color> {
    let hex = value.trim().strip_prefix('#').unwrap_or(value.trim());
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_to_color_parses_with_and_without_prefix() {
        assert_eq!(hex_to_color("#ff0000"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(hex_to_color("00ff00"), Some(Color::Rgb(0, 255, 0)));
        assert_eq!(hex_to_color("#nope00"), None);
        assert_eq!(hex_to_color("#fff"), None);
    }

    #[test]
    fn clamp_name_pads_and_truncates() {
        assert_eq!(clamp_name("ab", 4), "ab  ");
        assert_eq!(clamp_name("abcdef", 4), "ab..");
    }
}
