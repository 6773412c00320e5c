//! Lifequest Core - Game-state engine for a self-tracking gamification layer
//!
//! This crate provides the single authoritative state object and its
//! command surface:
//! - The `GameState` root aggregate and its seeded default catalogs
//! - Leveling math mapping XP to level tiers
//! - The buff/debuff XP resolver
//! - Day-rollover, streak, and missed-day handling
//! - Achievement evaluation with one-way unlock latches
//! - The 30-slot daily reward cycle
//! - The end-of-day summarizer and its immutable archive records
//!
//! Everything is synchronous and side-effect free toward the outside
//! world: operations return the events they emitted instead of calling
//! a notification layer, "today" is injected as a parameter instead of
//! read from a clock, and persistence is the caller's concern (see the
//! `lifequest-store` crate).

pub mod achievement;
pub mod catalog;
mod day;
mod engine;
mod error;
mod exam;
mod event;
mod goal;
mod id;
pub mod level;
mod modifier;
mod quest;
mod reward;
mod season;
mod shop;
mod sport;
mod state;
mod stats;
mod study;

pub use achievement::Achievement;
pub use day::{DayQuality, DayRecord};
pub use engine::{Engine, UpdateResult};
pub use error::{Error, Result};
pub use exam::{exam_xp, ExamDraft, ExamResult};
pub use event::Event;
pub use goal::{Goal, GoalDraft, GoalKind};
pub use id::Id;
pub use level::{level_for_xp, xp_for_level, xp_for_next_level};
pub use modifier::{resolve_xp, Buff, Debuff};
pub use quest::{Quest, QuestDraft, QuestKind};
pub use reward::{day_in_cycle, DailyReward, CYCLE_LENGTH};
pub use season::SeasonRecord;
pub use shop::{InventoryItem, ItemCategory, ItemEffect, Rarity, ShopItem};
pub use sport::{BodyMetrics, SportActivity, SportDraft, SportEntry, DEFAULT_HEIGHT_CM};
pub use state::GameState;
pub use stats::{StatDelta, Stats, STAT_MAX, STAT_MIN};
pub use study::{session_xp, StudyDraft, StudyEntry, StudyKind};
