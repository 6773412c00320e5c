//! Workouts and body measurements

use crate::Id;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fallback height used until one has been recorded
pub const DEFAULT_HEIGHT_CM: f64 = 170.0;

/// Kind of workout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SportActivity {
    Running,
    Gym,
    Pushups,
    Pullups,
    Cardio,
    Stretching,
    Yoga,
    Other,
}

/// One logged workout, append-only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportEntry {
    pub id: Id,
    pub date: NaiveDate,
    pub activity: SportActivity,
    pub duration_minutes: u32,
    /// 1-5 scale
    pub intensity: u8,
    /// For strength training
    pub reps: Option<u32>,
    /// Kilometers, for running
    pub distance_km: Option<f64>,
    pub notes: Option<String>,
}

/// Input for logging a workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportDraft {
    pub activity: SportActivity,
    pub duration_minutes: u32,
    pub intensity: u8,
    pub reps: Option<u32>,
    pub distance_km: Option<f64>,
    pub notes: Option<String>,
}

/// One weight measurement, append-only. Height is carried over from
/// the first recorded entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyMetrics {
    pub id: Id,
    pub date: NaiveDate,
    pub weight_kg: f64,
    pub height_cm: f64,
}
