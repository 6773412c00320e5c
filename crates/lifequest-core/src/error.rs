//! Error types for lifequest-core
//!
//! Every guard failure on the command surface is a typed variant here.
//! None of these are fatal: callers surface them as inline feedback and
//! the state is left untouched whenever an operation returns `Err`.

use crate::Id;
use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Study session has no duration")]
    StudySessionEmpty,

    #[error("Workout has no duration")]
    WorkoutEmpty,

    #[error("Goal not found: {0}")]
    GoalNotFound(Id),

    #[error("Quest not found: {0}")]
    QuestNotFound(Id),

    #[error("Buff not found: {0}")]
    BuffNotFound(String),

    #[error("Debuff not found: {0}")]
    DebuffNotFound(String),

    #[error("Unknown shop item: {0}")]
    UnknownItem(String),

    #[error("Not enough gold: need {price}, have {gold}")]
    NotEnoughGold { price: u32, gold: u32 },

    #[error("Item not in inventory: {0}")]
    ItemNotOwned(String),

    #[error("Item has no usable effect: {0}")]
    ItemWithoutEffect(String),

    #[error("Daily reward already claimed today")]
    RewardAlreadyClaimed,

    #[error("No reward slot for cycle day {0}")]
    RewardSlotMissing(u32),

    #[error("Day already completed today")]
    DayAlreadyCompleted,

    #[error("Impressions must not be blank")]
    ImpressionsEmpty,

    #[error("Exam max score must be positive")]
    ExamScaleInvalid,

    #[error("Malformed save payload: {0}")]
    MalformedSave(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
