//! Events emitted by mutation operations
//!
//! Operations return these alongside their result instead of calling
//! into a notification layer directly. Payloads are primitives only;
//! display copy is composed by whatever consumes the events.

use crate::DayQuality;
use serde::{Deserialize, Serialize};

/// A structured event produced by a committed mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Session started
    Greeting,
    /// XP crossed a level boundary upward
    LevelUp { level: u32 },
    /// An achievement latched
    AchievementUnlocked { title: String },
    /// Today's reward slot was claimed
    DailyRewardClaimed { xp_reward: u32 },
    /// A quest completed for the first time
    QuestCompleted { title: String, xp_reward: u32 },
    /// A goal completed for the first time
    GoalCompleted { title: String, xp_reward: u32 },
    /// The day was summarized and archived
    DayEnded { day_number: u32, quality: DayQuality },
}
