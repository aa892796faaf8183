use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier assigned by the palette store. The API is free to hand out
/// numbers or strings; keep whichever shape arrived and render it verbatim
/// into request paths.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaletteId {
    Num(u64),
    Text(String),
}

impl fmt::Display for PaletteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteId::Num(n) => write!(f, "{n}"),
            PaletteId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl FromStr for PaletteId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<u64>() {
            Ok(n) => PaletteId::Num(n),
            Err(_) => PaletteId::Text(s.to_string()),
        })
    }
}

/// A palette record owned by the external store. The client only ever holds
/// a read-only cached copy of these.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPalette {
    pub id: PaletteId,
    pub name: String,
    pub colors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_id_accepts_numbers_and_strings() {
        let numeric: PaletteId = serde_json::from_str("7").unwrap();
        assert_eq!(numeric, PaletteId::Num(7));
        assert_eq!(numeric.to_string(), "7");

        let text: PaletteId = serde_json::from_str("\"abc-123\"").unwrap();
        assert_eq!(text, PaletteId::Text("abc-123".to_string()));
        assert_eq!(text.to_string(), "abc-123");
    }

    #[test]
    fn palette_id_from_str_prefers_numeric() {
        assert_eq!("42".parse::<PaletteId>().unwrap(), PaletteId::Num(42));
        assert_eq!(
            "x42".parse::<PaletteId>().unwrap(),
            PaletteId::Text("x42".to_string())
        );
    }
}
