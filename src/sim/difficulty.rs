//! Difficulty curve
//!
//! Maps a level number to one of four fixed tiers. Table-driven so the
//! boundaries live in one place.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Difficulty buckets, easiest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Impossible,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Impossible => "Impossible",
        }
    }

    /// Theme color name the rendering layer uses for this tier
    pub fn color_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "cyan",
            Difficulty::Medium => "yellow",
            Difficulty::Hard => "orange",
            Difficulty::Impossible => "red",
        }
    }
}

/// A tier of the curve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifficultyTier {
    pub difficulty: Difficulty,
    /// Levels covered by this tier (inclusive)
    pub levels: RangeInclusive<u32>,
    /// Finishing in fewer moves than this counts as perfect
    pub moves_budget: u32,
}

pub static DIFFICULTY_TIERS: [DifficultyTier; 4] = [
    DifficultyTier {
        difficulty: Difficulty::Easy,
        levels: 1..=10,
        moves_budget: 10,
    },
    DifficultyTier {
        difficulty: Difficulty::Medium,
        levels: 11..=20,
        moves_budget: 20,
    },
    DifficultyTier {
        difficulty: Difficulty::Hard,
        levels: 21..=30,
        moves_budget: 30,
    },
    DifficultyTier {
        difficulty: Difficulty::Impossible,
        levels: 31..=50,
        moves_budget: 40,
    },
];

/// Tier for a level. Anything outside the table (past 50) stays impossible.
pub fn tier_for(level: u32) -> &'static DifficultyTier {
    DIFFICULTY_TIERS
        .iter()
        .find(|tier| tier.levels.contains(&level))
        .unwrap_or(&DIFFICULTY_TIERS[DIFFICULTY_TIERS.len() - 1])
}

impl DifficultyTier {
    /// True when a finished level's move count beats the budget
    pub fn is_perfect(&self, moves: u32) -> bool {
        moves < self.moves_budget
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(tier_for(1).difficulty, Difficulty::Easy);
        assert_eq!(tier_for(10).difficulty, Difficulty::Easy);
        assert_eq!(tier_for(11).difficulty, Difficulty::Medium);
        assert_eq!(tier_for(20).difficulty, Difficulty::Medium);
        assert_eq!(tier_for(21).difficulty, Difficulty::Hard);
        assert_eq!(tier_for(30).difficulty, Difficulty::Hard);
        assert_eq!(tier_for(31).difficulty, Difficulty::Impossible);
        assert_eq!(tier_for(50).difficulty, Difficulty::Impossible);
    }

    #[test]
    fn test_budgets() {
        assert_eq!(tier_for(5).moves_budget, 10);
        assert_eq!(tier_for(15).moves_budget, 20);
        assert_eq!(tier_for(25).moves_budget, 30);
        assert_eq!(tier_for(45).moves_budget, 40);
    }

    #[test]
    fn test_past_table_falls_back_to_impossible() {
        assert_eq!(tier_for(51).difficulty, Difficulty::Impossible);
        assert_eq!(tier_for(10_000).moves_budget, 40);
    }

    #[test]
    fn test_tiers_do_not_overlap() {
        for level in 1..=50 {
            let hits = DIFFICULTY_TIERS
                .iter()
                .filter(|t| t.levels.contains(&level))
                .count();
            assert_eq!(hits, 1, "level {level} should map to exactly one tier");
        }
    }

    #[test]
    fn test_is_perfect() {
        let easy = tier_for(1);
        assert!(easy.is_perfect(9));
        assert!(!easy.is_perfect(10));
    }
}
