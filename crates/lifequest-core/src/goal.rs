//! Time-boxed targets

use crate::Id;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Horizon of a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalKind {
    Daily,
    Weekly,
    Monthly,
}

impl GoalKind {
    /// XP granted when a goal of this horizon is first completed
    pub fn xp_reward(&self) -> u32 {
        match self {
            GoalKind::Daily => 50,
            GoalKind::Weekly => 200,
            GoalKind::Monthly => 500,
        }
    }
}

/// A time-boxed target. Completion is one-way: once `completed` flips
/// to true it never flips back, and the completion reward is granted
/// exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: Id,
    pub title: String,
    pub kind: GoalKind,
    pub planned_hours: f64,
    pub actual_hours: f64,
    pub completed: bool,
    pub created_at: NaiveDate,
    pub deadline: NaiveDate,
}

/// Input for creating a goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalDraft {
    pub title: String,
    pub kind: GoalKind,
    pub planned_hours: f64,
    pub deadline: NaiveDate,
}
