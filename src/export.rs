/// PNG export of the working palette.
use std::path::Path;

use anyhow::{Context, Result};
use image::{ImageFormat, Rgba, RgbaImage};

pub const IMAGE_WIDTH: u32 = 900;
pub const IMAGE_HEIGHT: u32 = 260;
/// Color bands fill the top of the image; labels go underneath.
pub const BAND_HEIGHT: u32 = 200;

const BACKGROUND: Rgba<u8> = Rgba([0x0f, 0x17, 0x2a, 0xff]);
const LABEL_COLOR: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);
const LABEL_TOP: u32 = 218;

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;
const GLYPH_SCALE: u32 = 2;
// One column of spacing between glyphs, pre-scale.
const GLYPH_ADVANCE: u32 = GLYPH_WIDTH + 1;

/// Rasterize a palette: equal-width vertical bands across the full image
/// width, each uppercase hex label centered beneath its band in a monospace
/// bitmap face.
pub fn render_palette(colors: &[String]) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(IMAGE_WIDTH, IMAGE_HEIGHT, BACKGROUND);
    if colors.is_empty() {
        return img;
    }
    let band_width = IMAGE_WIDTH / colors.len() as u32;
    for (index, color) in colors.iter().enumerate() {
        let x0 = band_width * index as u32;
        if let Some(fill) = parse_hex(color) {
            fill_band(&mut img, x0, band_width, fill);
        }
        draw_label(&mut img, &color.to_uppercase(), x0, band_width);
    }
    img
}

/// Render `colors` and write the result as a PNG to `path`.
pub fn write_png(colors: &[String], path: &Path) -> Result<()> {
    render_palette(colors)
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("failed to write {}", path.display()))
}

fn fill_band(img: &mut RgbaImage, x0: u32, width: u32, fill: Rgba<u8>) {
    for y in 0..BAND_HEIGHT {
        for x in x0..(x0 + width).min(IMAGE_WIDTH) {
            img.put_pixel(x, y, fill);
        }
    }
}

fn draw_label(img: &mut RgbaImage, text: &str, x0: u32, band_width: u32) {
    let text_width = text.chars().count() as u32 * GLYPH_ADVANCE * GLYPH_SCALE;
    let mut x = x0 + band_width.saturating_sub(text_width) / 2;
    for ch in text.chars() {
        draw_glyph(img, ch, x, LABEL_TOP);
        x += GLYPH_ADVANCE * GLYPH_SCALE;
    }
}

fn draw_glyph(img: &mut RgbaImage, ch: char, x0: u32, y0: u32) {
    let Some(rows) = glyph_rows(ch) else {
        return;
    };
    for (row, bits) in rows.iter().enumerate() {
        for col in 0..GLYPH_WIDTH {
            if bits & (0x10u8 >> col) == 0 {
                continue;
            }
            for dy in 0..GLYPH_SCALE {
                for dx in 0..GLYPH_SCALE {
                    let x = x0 + col * GLYPH_SCALE + dx;
                    let y = y0 + row as u32 * GLYPH_SCALE + dy;
                    if x < IMAGE_WIDTH && y < IMAGE_HEIGHT {
                        img.put_pixel(x, y, LABEL_COLOR);
                    }
                }
            }
        }
    }
}

fn parse_hex(value: &str) -> Option<Rgba<u8>> {
    let hex = value.trim().strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Rgba([r, g, b, 0xff]))
}

/// 5x7 bitmap rows for the characters a hex label can contain. Bit 4 is the
/// leftmost column.
fn glyph_rows(ch: char) -> Option<[u8; GLYPH_HEIGHT as usize]> {
    let rows = match ch {
        '#' => [0x0a, 0x0a, 0x1f, 0x0a, 0x1f, 0x0a, 0x0a],
        '0' => [0x0e, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0e],
        '1' => [0x04, 0x0c, 0x04, 0x04, 0x04, 0x04, 0x0e],
        '2' => [0x0e, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1f],
        '3' => [0x1f, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0e],
        '4' => [0x02, 0x06, 0x0a, 0x12, 0x1f, 0x02, 0x02],
        '5' => [0x1f, 0x10, 0x1e, 0x01, 0x01, 0x11, 0x0e],
        '6' => [0x06, 0x08, 0x10, 0x1e, 0x11, 0x11, 0x0e],
        '7' => [0x1f, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0e, 0x11, 0x11, 0x0e, 0x11, 0x11, 0x0e],
        '9' => [0x0e, 0x11, 0x11, 0x0f, 0x01, 0x02, 0x0c],
        'A' => [0x0e, 0x11, 0x11, 0x1f, 0x11, 0x11, 0x11],
        'B' => [0x1e, 0x11, 0x11, 0x1e, 0x11, 0x11, 0x1e],
        'C' => [0x0e, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0e],
        'D' => [0x1c, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1c],
        'E' => [0x1f, 0x10, 0x10, 0x1e, 0x10, 0x10, 0x1f],
        'F' => [0x1f, 0x10, 0x10, 0x1e, 0x10, 0x10, 0x10],
        _ => return None,
    };
    Some(rows)
}
