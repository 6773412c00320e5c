//! Database models for the persisted snapshot.

use native_db::*;
use native_model::{native_model, Model};
use serde::{Deserialize, Serialize};

/// The single save slot. One row under a fixed key, holding the full
/// game state as a JSON blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 1, version = 1)]
#[native_db]
pub struct SaveSlot {
    /// Always the storage key - single row.
    #[primary_key]
    pub key: String,
    /// JSON-serialized game state.
    pub blob: String,
}
