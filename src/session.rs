//! Play session
//!
//! Owns the generator, the progress ledger and the active attempt, and
//! applies the level-boundary rules: a won attempt is recorded exactly once,
//! retry deals a new board for the same level, advance moves the ledger on.

use thiserror::Error;

use crate::persistence::ScalarStore;
use crate::progress::ProgressLedger;
use crate::settings::{Settings, SettingsError};
use crate::sim::{GamePhase, GameState, InvalidLevelError, LevelGenerator, TapOutcome};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Level(#[from] InvalidLevelError),
}

#[derive(Debug)]
pub struct Session<S: ScalarStore> {
    settings: Settings,
    generator: LevelGenerator,
    ledger: ProgressLedger<S>,
    game: GameState,
    recorded: bool,
}

impl<S: ScalarStore> Session<S> {
    /// Load progress from `store` and deal the current level
    pub fn new(settings: Settings, store: S) -> Result<Self, SessionError> {
        settings.validate()?;
        let generator = match settings.seed {
            Some(seed) => LevelGenerator::new(seed),
            None => LevelGenerator::from_entropy(),
        }
        .with_palette_size(settings.palette_size);
        let ledger = ProgressLedger::load(store);

        let mut session = Self {
            game: GameState::new(1, Default::default()),
            settings,
            generator,
            ledger,
            recorded: false,
        };
        session.deal(session.ledger.current_level())?;
        Ok(session)
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut GameState {
        &mut self.game
    }

    pub fn ledger(&self) -> &ProgressLedger<S> {
        &self.ledger
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn level(&self) -> u32 {
        self.game.level
    }

    /// Forward a tap; a win is recorded into the ledger once
    pub fn tap(&mut self, tube: usize) -> TapOutcome {
        let outcome = self.game.tap(tube);
        if self.game.phase == GamePhase::Won && !self.recorded {
            if let Some(summary) = self.game.summary() {
                self.ledger.record_summary(&summary);
            }
            self.recorded = true;
        }
        outcome
    }

    /// Same level, new board
    pub fn retry(&mut self) -> Result<(), InvalidLevelError> {
        let level = self.game.level;
        log::info!("Retrying level {}", level);
        self.deal(level)
    }

    /// Same level, same board
    pub fn reset(&mut self) {
        log::info!("Resetting level {}", self.game.level);
        self.game.reset();
    }

    /// Next level; only allowed once the current one is won
    pub fn advance(&mut self) -> Result<bool, InvalidLevelError> {
        if self.game.phase != GamePhase::Won {
            return Ok(false);
        }
        let level = self.ledger.advance_level();
        self.deal(level)?;
        Ok(true)
    }

    /// Replace the attempt; on error the current one is left untouched
    fn deal(&mut self, level: u32) -> Result<(), InvalidLevelError> {
        let board = self.generator.generate(level)?;
        self.game = GameState::with_rules(
            level,
            board,
            self.settings.max_lives,
            self.settings.move_policy,
        );
        self.recorded = false;
        Ok(())
    }
}
