//! Game settings and preferences
//!
//! Persisted separately from progress, as JSON (a file on native,
//! LocalStorage on the web).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::MAX_LIVES;
use crate::sim::PALETTE;

/// How many candies a legal drop carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MovePolicy {
    /// One candy per tap (capacity is still checked against the whole run)
    #[default]
    SingleToken,
    /// The whole matching run in one tap
    WholeRun,
}

impl MovePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovePolicy::SingleToken => "single_token",
            MovePolicy::WholeRun => "whole_run",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "single_token" | "single" => Some(MovePolicy::SingleToken),
            "whole_run" | "run" => Some(MovePolicy::WholeRun),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("palette size {0} is outside 1..={max}", max = PALETTE.len())]
    PaletteSize(usize),
    #[error("max lives must be at least 1")]
    NoLives,
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("settings I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Rules ===
    /// Mistakes allowed per attempt
    pub max_lives: u8,
    /// Colors available to the generator (prefix of the palette)
    pub palette_size: usize,
    /// Candies carried by a legal move
    pub move_policy: MovePolicy,
    /// Fixed generator seed (random when absent)
    pub seed: Option<u64>,

    // === Feedback (passed through to the presentation layer) ===
    /// Haptic tap feedback
    pub haptics: bool,
    /// Confetti on a won level
    pub confetti: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_lives: MAX_LIVES,
            palette_size: PALETTE.len(),
            move_policy: MovePolicy::SingleToken,
            seed: None,

            haptics: true,
            confetti: true,
        }
    }
}

impl Settings {
    /// Reject values the engine cannot play with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.palette_size == 0 || self.palette_size > PALETTE.len() {
            return Err(SettingsError::PaletteSize(self.palette_size));
        }
        if self.max_lives == 0 {
            return Err(SettingsError::NoLives);
        }
        Ok(())
    }

    /// Parse and validate settings JSON (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "candy_sort_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(err) => log::warn!("Ignoring stored settings: {}", err),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = self.to_json() {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Load settings from a JSON file, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                return Self::default();
            }
            Err(err) => {
                log::warn!("Cannot read settings at {}: {}", path.display(), err);
                return Self::default();
            }
        };
        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("Ignoring settings at {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Save settings to a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to(&self, path: &std::path::Path) -> Result<(), SettingsError> {
        std::fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
