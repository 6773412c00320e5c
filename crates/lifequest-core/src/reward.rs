//! The 30-day repeating daily reward cycle

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of slots in the repeating schedule
pub const CYCLE_LENGTH: u32 = 30;

/// One slot of the repeating schedule. The schedule itself is static
/// except for `claimed_at`, which records the most recent claim of this
/// cycle position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReward {
    /// 1-30 position within the cycle
    pub day_number: u32,
    pub gold_reward: u32,
    pub xp_reward: u32,
    /// Shop item granted alongside the gold and XP, if any
    pub item_reward: Option<String>,
    pub claimed_at: Option<NaiveDate>,
}

/// Map an absolute day counter onto the 1-30 cycle position
pub fn day_in_cycle(current_day: u32) -> u32 {
    1 + (current_day.saturating_sub(1)) % CYCLE_LENGTH
}
