//! End-of-day archive records

use crate::{Id, Stats};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Tone of a completed day, derived from the submitted self-assessment.
/// Used only to pick a notification flavor; never stored on the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayQuality {
    Poor,
    Good,
    Excellent,
}

impl DayQuality {
    /// Classify the mean of the submitted self-assessment channels
    pub fn classify(mean: f64) -> Self {
        if mean < 40.0 {
            DayQuality::Poor
        } else if mean >= 70.0 {
            DayQuality::Excellent
        } else {
            DayQuality::Good
        }
    }
}

/// Immutable archive of one completed calendar day. Exactly one record
/// exists per day on which the end-of-day summary was invoked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    pub id: Id,
    pub date: NaiveDate,
    pub day_number: u32,
    /// Live meters after averaging in the self-assessment
    pub stats_summary: Stats,
    /// Baseline at the start of the day (the prior record's summary)
    pub previous_stats: Stats,
    /// The raw "how did today feel" self-assessment
    pub daily_state: Stats,
    pub impressions: String,
    pub weight: Option<f64>,
    /// Cumulative study on this day, rounded to a tenth of an hour
    pub total_study_hours: f64,
    /// Completed daily quests at the time the day ended
    pub completed_quests: u32,
    /// Completed daily goals at the time the day ended
    pub completed_goals: u32,
}
