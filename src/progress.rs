//! Player progress and achievements
//!
//! Three persisted counters (level reached, perfect levels, speed record)
//! and a static award table evaluated against them.

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_SPEED_RECORD;
use crate::persistence::ScalarStore;
use crate::sim::{GamePhase, LevelSummary};

/// Store keys
pub const CURRENT_LEVEL_KEY: &str = "candy_sort_current_level";
pub const PERFECT_LEVELS_KEY: &str = "candy_sort_perfect_levels";
pub const SPEED_RECORD_KEY: &str = "candy_sort_speed_record";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Award {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
    Master,
    GrandMaster,
    God,
    Sniper,
}

/// Static description of an award
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AchievementDefinition {
    pub award: Award,
    pub name: &'static str,
    /// Levels completed (`current_level - 1`) needed to unlock
    pub needed_games: Option<u32>,
    /// Perfect levels needed to unlock
    pub needed_perfect_games: Option<u32>,
    pub reward_items: &'static [&'static str],
    /// Following award in display order (not a prerequisite)
    pub next: Option<Award>,
    pub description: Option<&'static str>,
}

const fn games_award(
    award: Award,
    name: &'static str,
    needed: u32,
    reward_items: &'static [&'static str],
    next: Option<Award>,
) -> AchievementDefinition {
    AchievementDefinition {
        award,
        name,
        needed_games: Some(needed),
        needed_perfect_games: None,
        reward_items,
        next,
        description: None,
    }
}

/// All awards, in display order
pub static ACHIEVEMENTS: [AchievementDefinition; 8] = [
    games_award(Award::Beginner, "Beginner", 3, &["🧢", "👕", "👟"], Some(Award::Intermediate)),
    games_award(Award::Intermediate, "Intermediate", 10, &["🕶️", "👖", "⌚"], Some(Award::Advanced)),
    games_award(Award::Advanced, "Advanced", 25, &["🧥", "🥾", "🎒"], Some(Award::Expert)),
    games_award(Award::Expert, "Expert", 50, &["🦺", "🎧", "🔩"], Some(Award::Master)),
    games_award(Award::Master, "Master", 100, &["🧥✨", "👑", "🔫"], Some(Award::GrandMaster)),
    games_award(Award::GrandMaster, "Grand Master", 200, &["🥋", "🏆", "🥇"], Some(Award::God)),
    games_award(Award::God, "God", 500, &["☀️", "🔥", "💦"], None),
    AchievementDefinition {
        award: Award::Sniper,
        name: "Sniper",
        needed_games: None,
        needed_perfect_games: Some(10),
        reward_items: &["🎯"],
        next: None,
        description: Some("Complete 10 levels in limited moves to unlock this badge"),
    },
];

impl Award {
    pub fn definition(&self) -> &'static AchievementDefinition {
        // Table is indexed in enum order
        &ACHIEVEMENTS[*self as usize]
    }

    /// Game-count axis: `current_level - 1` levels completed
    pub fn unlocked_by_games(&self, current_level: u32) -> bool {
        self.definition()
            .needed_games
            .is_some_and(|needed| current_level.saturating_sub(1) >= needed)
    }

    /// Perfect-count axis
    pub fn unlocked_by_perfects(&self, perfect_level_count: u32) -> bool {
        self.definition()
            .needed_perfect_games
            .is_some_and(|needed| perfect_level_count >= needed)
    }
}

/// Progress toward one award, for profile display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AwardProgress {
    pub award: Award,
    pub current: u32,
    pub needed: u32,
    pub unlocked: bool,
}

/// Persistent progress counters
#[derive(Debug)]
pub struct ProgressLedger<S: ScalarStore> {
    store: S,
    current_level: u32,
    perfect_level_count: u32,
    speed_record: f64,
}

impl<S: ScalarStore> ProgressLedger<S> {
    /// Load counters from the store (missing keys start fresh)
    pub fn load(store: S) -> Self {
        let current_level = store
            .get_int(CURRENT_LEVEL_KEY)
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(1)
            .max(1);
        let perfect_level_count = store
            .get_int(PERFECT_LEVELS_KEY)
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(0);
        let speed_record = store
            .get_real(SPEED_RECORD_KEY)
            .filter(|v| v.is_finite())
            .unwrap_or(DEFAULT_SPEED_RECORD);

        log::info!(
            "Progress: level {}, {} perfect, record {}",
            current_level,
            perfect_level_count,
            speed_record
        );

        Self {
            store,
            current_level,
            perfect_level_count,
            speed_record,
        }
    }

    pub fn current_level(&self) -> u32 {
        self.current_level
    }

    pub fn perfect_level_count(&self) -> u32 {
        self.perfect_level_count
    }

    pub fn speed_record(&self) -> f64 {
        self.speed_record
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Move on to the next level
    pub fn advance_level(&mut self) -> u32 {
        self.current_level = self.current_level.saturating_add(1);
        self.persist_int(CURRENT_LEVEL_KEY, self.current_level);
        log::info!("Advanced to level {}", self.current_level);
        self.current_level
    }

    /// Count a level finished under its move budget
    pub fn record_perfect(&mut self) -> u32 {
        self.perfect_level_count = self.perfect_level_count.saturating_add(1);
        self.persist_int(PERFECT_LEVELS_KEY, self.perfect_level_count);
        self.perfect_level_count
    }

    /// Record a finished attempt; only perfect wins change anything
    pub fn record_summary(&mut self, summary: &LevelSummary) -> bool {
        if summary.phase == GamePhase::Won && summary.perfect {
            self.record_perfect();
            true
        } else {
            false
        }
    }

    /// Keep the best (lowest) completion time. Returns true on a new record.
    pub fn record_speed(&mut self, seconds: f64) -> bool {
        if !seconds.is_finite() || seconds < 0.0 || seconds >= self.speed_record {
            return false;
        }
        self.speed_record = seconds;
        if let Err(err) = self.store.set_real(SPEED_RECORD_KEY, seconds) {
            log::warn!("Failed to persist {}: {}", SPEED_RECORD_KEY, err);
        }
        log::info!("New speed record: {}", seconds);
        true
    }

    pub fn is_unlocked(&self, award: Award) -> bool {
        award.unlocked_by_games(self.current_level)
            || award.unlocked_by_perfects(self.perfect_level_count)
    }

    /// Unlocked awards in display order
    pub fn achievements_unlocked(&self) -> Vec<Award> {
        ACHIEVEMENTS
            .iter()
            .map(|def| def.award)
            .filter(|&award| self.is_unlocked(award))
            .collect()
    }

    /// Reward items of every unlocked award
    pub fn unlocked_items(&self) -> Vec<&'static str> {
        self.achievements_unlocked()
            .into_iter()
            .flat_map(|award| award.definition().reward_items.iter().copied())
            .collect()
    }

    pub fn progress_for(&self, award: Award) -> AwardProgress {
        let def = award.definition();
        let (current, needed) = match (def.needed_games, def.needed_perfect_games) {
            (Some(needed), _) => (self.current_level.saturating_sub(1), needed),
            (None, Some(needed)) => (self.perfect_level_count, needed),
            (None, None) => (0, 0),
        };
        AwardProgress {
            award,
            current,
            needed,
            unlocked: self.is_unlocked(award),
        }
    }

    fn persist_int(&mut self, key: &str, value: u32) {
        if let Err(err) = self.store.set_int(key, i64::from(value)) {
            log::warn!("Failed to persist {}: {}", key, err);
        }
    }
}
