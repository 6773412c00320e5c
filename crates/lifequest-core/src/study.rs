//! Logged study sessions

use crate::Id;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of study session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudyKind {
    Theory,
    Practice,
}

/// One logged study session. Immutable once created; `xp_earned` is
/// fixed at creation time and never re-derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyEntry {
    pub id: Id,
    pub date: NaiveDate,
    pub subject: String,
    pub kind: StudyKind,
    pub hours: u32,
    pub minutes: u32,
    pub comment: Option<String>,
    /// 1-5: how well focused and productive the session was
    pub quality: u8,
    /// 1-5: concentration level
    pub focus: u8,
    /// 1-5: how efficient the session felt
    pub efficiency: u8,
    pub xp_earned: u32,
}

impl StudyEntry {
    /// Total session length in minutes
    pub fn total_minutes(&self) -> u32 {
        self.hours * 60 + self.minutes
    }

    /// Session length in fractional hours
    pub fn total_hours(&self) -> f64 {
        self.hours as f64 + self.minutes as f64 / 60.0
    }
}

/// Input for logging a study session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyDraft {
    pub subject: String,
    pub kind: StudyKind,
    pub hours: u32,
    pub minutes: u32,
    pub comment: Option<String>,
    pub quality: u8,
    pub focus: u8,
    pub efficiency: u8,
}

/// XP earned by a session: two points per minute scaled by quality
/// (quality 3 is par), plus a 25% bonus for practice work.
pub fn session_xp(minutes: u32, quality: u8, kind: StudyKind) -> u32 {
    let base = (minutes as f64 * 2.0 * (quality as f64 / 3.0)).round();
    let bonus = match kind {
        StudyKind::Practice => (base * 0.25).round(),
        StudyKind::Theory => 0.0,
    };
    (base + bonus) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_xp_theory() {
        // 90 minutes at top quality: 90 * 2 * (5/3) = 300
        assert_eq!(session_xp(90, 5, StudyKind::Theory), 300);
        // Par quality leaves the base rate untouched
        assert_eq!(session_xp(60, 3, StudyKind::Theory), 120);
    }

    #[test]
    fn test_session_xp_practice_bonus() {
        // base 120, bonus round(120 * 0.25) = 30
        assert_eq!(session_xp(60, 3, StudyKind::Practice), 150);
    }

    #[test]
    fn test_low_quality_scales_down() {
        // 60 * 2 * (1/3) = 40
        assert_eq!(session_xp(60, 1, StudyKind::Theory), 40);
    }
}
