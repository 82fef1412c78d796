//! Candy Sort - A tube-sorting candy puzzle
//!
//! Core modules:
//! - `sim`: Deterministic game engine (difficulty curve, level generation, move engine)
//! - `progress`: Cross-session progress counters and achievements
//! - `persistence`: Key-addressed scalar storage (memory, JSON file, LocalStorage)
//! - `settings`: Data-driven game configuration
//! - `session`: Wires generator, game and ledger into one play loop

pub mod persistence;
pub mod progress;
pub mod session;
pub mod settings;
pub mod sim;

pub use persistence::{MemoryStore, ScalarStore, StoreError};
pub use progress::{Award, ProgressLedger};
pub use session::{Session, SessionError};
pub use settings::{MovePolicy, Settings};

/// Game configuration constants
pub mod consts {
    /// Candies a tube can hold during play
    pub const TUBE_CAPACITY: usize = 4;
    /// Copies of each color dealt into a level
    pub const CANDIES_PER_COLOR: usize = 4;
    /// Upper bound on tubes in a generated level
    pub const MAX_TUBES: usize = 10;
    /// Mistakes allowed per attempt
    pub const MAX_LIVES: u8 = 3;
    /// Speed record before any level is timed (lower is better)
    pub const DEFAULT_SPEED_RECORD: f64 = 1000.0;
}
