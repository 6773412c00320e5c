//! Practice test results

use crate::Id;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One practice test score, immutable once recorded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamResult {
    pub id: Id,
    pub subject: String,
    pub date: NaiveDate,
    pub score: u32,
    pub max_score: u32,
    /// e.g. "mock exam 1", "mock exam 2"
    pub test_name: String,
    pub notes: Option<String>,
}

/// Input for recording a practice test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamDraft {
    pub subject: String,
    pub date: NaiveDate,
    pub score: u32,
    pub max_score: u32,
    pub test_name: String,
    pub notes: Option<String>,
}

/// XP awarded for a recorded score, proportional to the percentage
pub fn exam_xp(score: u32, max_score: u32) -> u32 {
    (100.0 * score as f64 / max_score as f64).round() as u32
}
