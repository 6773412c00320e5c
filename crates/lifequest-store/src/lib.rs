//! Lifequest Store - snapshot persistence using native_db
//!
//! The engine's persistence collaborator: the full game state as one
//! JSON blob under a single fixed key, rewritten wholesale after every
//! committed mutation and read wholesale at startup. A missing,
//! unreadable, or malformed snapshot is never an error toward the
//! caller; loading falls back to a fresh default state.

mod error;
mod models;
mod store;

pub use error::{Error, Result};
pub use store::{Store, STORAGE_KEY};
