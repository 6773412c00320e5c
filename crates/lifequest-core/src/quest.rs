//! Discrete tasks with fixed rewards

use crate::{Id, StatDelta};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Horizon of a quest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestKind {
    Daily,
    Weekly,
    Longterm,
}

/// A discrete task carrying an explicit XP reward and a partial stat
/// effect, both granted exactly once on completion. Quests are the only
/// entities that can be deleted, in any completion state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quest {
    pub id: Id,
    pub title: String,
    pub description: String,
    pub kind: QuestKind,
    pub xp_reward: u32,
    pub stat_effects: StatDelta,
    pub completed: bool,
    pub created_at: NaiveDate,
    pub deadline: Option<NaiveDate>,
}

/// Input for creating a quest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestDraft {
    pub title: String,
    pub description: String,
    pub kind: QuestKind,
    pub xp_reward: u32,
    pub stat_effects: StatDelta,
    pub deadline: Option<NaiveDate>,
}
