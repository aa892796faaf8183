/// Color utilities for palette generation and input checking.
use rand::RngExt;

/// A working palette always holds exactly this many colors.
pub const PALETTE_SIZE: usize = 5;

/// Validate if a string is a valid hex color (e.g., #RRGGBB).
pub fn is_valid_hex(s: &str) -> bool {
    s.starts_with('#') && s.len() == 7 && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Draw a single random color, uniform over the 24-bit RGB cube.
/// Lowercase, zero-padded, `#`-prefixed.
pub fn random_color() -> String {
    let mut rng = rand::rng();
    format!("#{:06x}", rng.random_range(0..=0xffffffu32))
}

/// Generate a fresh working palette. Each slot is an independent draw, so
/// repeats are allowed; the caller replaces the previous palette wholesale.
pub fn generate_palette() -> Vec<String> {
    (0..PALETTE_SIZE).map(|_| random_color()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_five_lowercase_hex_colors() {
        for _ in 0..100 {
            let palette = generate_palette();
            assert_eq!(palette.len(), PALETTE_SIZE);
            for color in &palette {
                assert_eq!(color.len(), 7);
                assert!(color.starts_with('#'));
                assert!(
                    color[1..]
                        .chars()
                        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
                    "unexpected color format: {color}"
                );
            }
        }
    }

    #[test]
    fn generations_are_independent() {
        // Two draws never have to share a color; they must both still be
        // well-formed palettes.
        let first = generate_palette();
        let second = generate_palette();
        assert_eq!(first.len(), second.len());
        assert_ne!(first, second, "16.7M^5 keyspace collided, check the rng");
    }

    #[test]
    fn hex_validation() {
        assert!(is_valid_hex("#aabbcc"));
        assert!(is_valid_hex("#AABB00"));
        assert!(!is_valid_hex("aabbcc"));
        assert!(!is_valid_hex("#abc"));
        assert!(!is_valid_hex("#aabbcg"));
        assert!(!is_valid_hex("#aabbcc1"));
    }
}
