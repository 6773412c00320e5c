//! One-time unlockable milestones
//!
//! Each achievement pairs a catalog entry with a named predicate over
//! the live state. The `unlocked` flag is a one-way latch: it flips
//! false to true at most once, ever, and the reward is granted on that
//! transition only. The slug list here is the canonical source of truth
//! for which predicates exist.

use crate::GameState;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const FIRST_DAY: &str = "first_day";
pub const WEEK_STREAK: &str = "week_streak";
pub const MONTH_STREAK: &str = "month_streak";
pub const STUDY_10H: &str = "study_10h";
pub const STUDY_50H: &str = "study_50h";
pub const STUDY_100H: &str = "study_100h";
pub const LEVEL_5: &str = "level_5";
pub const LEVEL_10: &str = "level_10";
pub const LEVEL_25: &str = "level_25";
pub const QUEST_10: &str = "quest_10";
pub const IRON_WEEK: &str = "iron_week";
pub const ALL_STATS_70: &str = "all_stats_70";

/// A one-time unlockable milestone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    /// Predicate slug, stable across versions
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub unlocked: bool,
    pub unlocked_at: Option<NaiveDate>,
    pub xp_reward: u32,
}

/// Whether the predicate behind `slug` currently holds.
///
/// Unknown slugs never hold, so achievements imported from a newer
/// snapshot simply stay locked.
pub(crate) fn predicate_holds(slug: &str, state: &GameState) -> bool {
    match slug {
        FIRST_DAY => state.current_day >= 1,
        WEEK_STREAK => state.streak >= 7,
        MONTH_STREAK => state.streak >= 30,
        STUDY_10H => state.total_study_hours() >= 10.0,
        STUDY_50H => state.total_study_hours() >= 50.0,
        STUDY_100H => state.total_study_hours() >= 100.0,
        LEVEL_5 => state.level >= 5,
        LEVEL_10 => state.level >= 10,
        LEVEL_25 => state.level >= 25,
        QUEST_10 => state.completed_quest_count() >= 10,
        IRON_WEEK => state.iron_mode && state.streak >= 7,
        ALL_STATS_70 => state.stats.channels().iter().all(|&v| v >= 70),
        _ => false,
    }
}
