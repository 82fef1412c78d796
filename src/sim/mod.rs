//! Deterministic game engine
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - One tap fully applies before the next
//! - No rendering, storage or platform dependencies

pub mod board;
pub mod candy;
pub mod difficulty;
pub mod level;
pub mod state;
pub mod tap;

pub use board::{Board, Tube, is_complete};
pub use candy::{Candy, PALETTE};
pub use difficulty::{DIFFICULTY_TIERS, Difficulty, DifficultyTier, tier_for};
pub use level::{InvalidLevelError, LevelGenerator, LevelShape};
pub use state::{GameEvent, GamePhase, GameState, LevelSummary, Selection, TubeView};
pub use tap::{TapOutcome, tap};
