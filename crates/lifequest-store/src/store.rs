//! Snapshot store wrapper.

use crate::error::{Error, Result};
use crate::models::SaveSlot;
use chrono::NaiveDate;
use lifequest_core::GameState;
use native_db::*;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, warn};

// Static models for the database
static MODELS: LazyLock<Models> = LazyLock::new(|| {
    let mut models = Models::new();
    models.define::<SaveSlot>().unwrap();
    models
});

/// Fixed key the snapshot lives under
pub const STORAGE_KEY: &str = "lifequest_gamestate";

/// Single-slot store for the persisted game state.
pub struct Store {
    pub(crate) db: Database<'static>,
}

impl Store {
    /// Open or create a database at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = Builder::new()
            .create(&MODELS, path.as_ref())
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(Self { db })
    }

    /// Create an in-memory database.
    pub fn in_memory() -> Result<Self> {
        let db = Builder::new()
            .create_in_memory(&MODELS)
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(Self { db })
    }

    /// Persist the full state, replacing any previous snapshot.
    pub fn save(&self, state: &GameState) -> Result<()> {
        let blob =
            serde_json::to_string(state).map_err(|e| Error::Serialization(e.to_string()))?;
        let rw = self.db.rw_transaction()?;
        rw.upsert(SaveSlot {
            key: STORAGE_KEY.to_string(),
            blob,
        })?;
        rw.commit()?;
        debug!("snapshot saved");
        Ok(())
    }

    /// Read the raw snapshot blob, if one is stored.
    pub fn load_blob(&self) -> Result<Option<String>> {
        let r = self.db.r_transaction()?;
        let stored: Option<SaveSlot> = r.get().primary(STORAGE_KEY.to_string())?;
        Ok(stored.map(|s| s.blob))
    }

    /// Load the stored state, falling back to fresh defaults when the
    /// slot is absent, unreadable, or malformed. This never surfaces an
    /// error: worst case is a first-run state.
    pub fn load_or_default(&self, today: NaiveDate) -> GameState {
        let blob = match self.load_blob() {
            Ok(Some(blob)) => blob,
            Ok(None) => {
                debug!("no stored snapshot, starting fresh");
                return GameState::new(today);
            }
            Err(err) => {
                warn!(%err, "snapshot unreadable, starting fresh");
                return GameState::new(today);
            }
        };
        match GameState::from_blob(&blob, today) {
            Ok(state) => state,
            Err(err) => {
                warn!(%err, "malformed snapshot, starting fresh");
                GameState::new(today)
            }
        }
    }

    /// Delete the stored snapshot.
    pub fn clear(&self) -> Result<()> {
        let rw = self.db.rw_transaction()?;
        let stored: Option<SaveSlot> = rw.get().primary(STORAGE_KEY.to_string())?;
        if let Some(slot) = stored {
            rw.remove(slot)?;
        }
        rw.commit()?;
        Ok(())
    }
}

impl From<native_db::db_type::Error> for Error {
    fn from(err: native_db::db_type::Error) -> Self {
        Error::Database(err.to_string())
    }
}
