//! Game state and core engine types
//!
//! Everything one level attempt needs lives here: the board, the pending
//! selection, counters and the phase.

use serde::{Deserialize, Serialize};

use super::board::{Board, is_complete};
use super::candy::Candy;
use super::difficulty::{DifficultyTier, tier_for};
use super::tap::{TapOutcome, tap};
use crate::consts::MAX_LIVES;
use crate::settings::MovePolicy;

/// Current phase of an attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Accepting taps
    Playing,
    /// Every tube sorted
    Won,
    /// Out of lives
    Failed,
}

impl GamePhase {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// A candy picked up and waiting to be dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Tube the candy was picked from
    pub source: usize,
    /// Top candy of the source tube at pick-up time
    pub candy: Candy,
}

/// Notifications for the feedback layer (haptics, sounds, confetti)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Picked { tube: usize },
    Cancelled { tube: usize },
    /// Legal move carrying `count` candies
    Moved { from: usize, to: usize, count: usize },
    /// Illegal drop, cost one life
    Rejected { from: usize, to: usize },
    Completed { moves: u32, perfect: bool },
    Failed { moves: u32 },
}

/// Per-tube snapshot for the rendering layer
#[derive(Debug, Clone, Copy)]
pub struct TubeView<'a> {
    pub index: usize,
    pub candies: &'a [Candy],
    pub selected: bool,
    pub completed: bool,
}

/// Outcome of a finished attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSummary {
    pub level: u32,
    pub moves: u32,
    pub moves_budget: u32,
    pub perfect: bool,
    pub phase: GamePhase,
}

/// State of one level attempt
#[derive(Debug, Clone)]
pub struct GameState {
    /// Level number this board was generated for
    pub level: u32,
    /// Live board (mutated only by taps)
    pub board: Board,
    /// Starting board, restored by `reset`
    initial_board: Board,
    pub selection: Option<Selection>,
    /// Counted moves, legal and illegal
    pub moves: u32,
    pub lives: u8,
    max_lives: u8,
    pub phase: GamePhase,
    pub move_policy: MovePolicy,
    tier: &'static DifficultyTier,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Start an attempt on `board` with default lives and move policy
    pub fn new(level: u32, board: Board) -> Self {
        Self::with_rules(level, board, MAX_LIVES, MovePolicy::default())
    }

    pub fn with_rules(level: u32, board: Board, max_lives: u8, move_policy: MovePolicy) -> Self {
        Self {
            level,
            initial_board: board.clone(),
            board,
            selection: None,
            moves: 0,
            lives: max_lives,
            max_lives,
            phase: GamePhase::Playing,
            move_policy,
            tier: tier_for(level),
            events: Vec::new(),
        }
    }

    /// Apply one player tap on a tube
    pub fn tap(&mut self, tube: usize) -> TapOutcome {
        tap(self, tube)
    }

    pub fn tier(&self) -> &'static DifficultyTier {
        self.tier
    }

    pub fn max_lives(&self) -> u8 {
        self.max_lives
    }

    pub fn is_complete(&self) -> bool {
        is_complete(&self.board)
    }

    pub fn is_holding(&self) -> bool {
        self.selection.is_some()
    }

    /// Moves left before the attempt stops counting as perfect
    pub fn remaining_moves(&self) -> u32 {
        self.tier.moves_budget.saturating_sub(self.moves)
    }

    pub fn initial_board(&self) -> &Board {
        &self.initial_board
    }

    /// Restore the starting board and counters for another try
    pub fn reset(&mut self) {
        self.board = self.initial_board.clone();
        self.selection = None;
        self.moves = 0;
        self.lives = self.max_lives;
        self.phase = GamePhase::Playing;
        self.events.clear();
    }

    /// Snapshot of every tube for drawing
    pub fn tube_views(&self) -> impl Iterator<Item = TubeView<'_>> + '_ {
        let selected = self.selection.map(|s| s.source);
        self.board
            .tubes
            .iter()
            .enumerate()
            .map(move |(index, tube)| TubeView {
                index,
                candies: &tube.candies,
                selected: selected == Some(index),
                completed: tube.is_completed(),
            })
    }

    /// Summary once the attempt has ended
    pub fn summary(&self) -> Option<LevelSummary> {
        if !self.phase.is_terminal() {
            return None;
        }
        Some(LevelSummary {
            level: self.level,
            moves: self.moves,
            moves_budget: self.tier.moves_budget,
            perfect: self.phase == GamePhase::Won && self.tier.is_perfect(self.moves),
            phase: self.phase,
        })
    }

    /// Take pending feedback events (oldest first)
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}
