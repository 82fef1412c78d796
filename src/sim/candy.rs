//! Candy palette

use serde::{Deserialize, Serialize};

/// A single candy. Only equality matters to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Candy {
    Red,
    Blue,
    Yellow,
    Green,
    Purple,
    Orange,
    Pink,
}

/// Full palette in deal order (levels use a prefix of it)
pub const PALETTE: [Candy; 7] = [
    Candy::Red,
    Candy::Blue,
    Candy::Yellow,
    Candy::Green,
    Candy::Purple,
    Candy::Orange,
    Candy::Pink,
];

impl Candy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Candy::Red => "red",
            Candy::Blue => "blue",
            Candy::Yellow => "yellow",
            Candy::Green => "green",
            Candy::Purple => "purple",
            Candy::Orange => "orange",
            Candy::Pink => "pink",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        PALETTE
            .iter()
            .copied()
            .find(|candy| candy.as_str() == s.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_is_distinct() {
        for (i, a) in PALETTE.iter().enumerate() {
            for b in &PALETTE[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Candy::from_str("Purple"), Some(Candy::Purple));
        assert_eq!(Candy::from_str("black"), None);
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Candy::Orange).unwrap();
        assert_eq!(json, "\"orange\"");
    }
}
