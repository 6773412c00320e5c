//! Archived play-through periods

use crate::Id;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Frozen snapshot of a completed season, immutable once appended
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonRecord {
    pub id: Id,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_days: u32,
    pub max_streak: u32,
    pub total_xp: u64,
    pub final_level: u32,
    /// Rounded to a tenth of an hour
    pub total_study_hours: f64,
}
