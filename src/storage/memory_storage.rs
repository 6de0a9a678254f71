use crate::{domain::Board, error::Result, storage::Storage};
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// In-memory storage holding the serialized snapshot in a single slot.
///
/// The equivalent of an environment-provided key-value slot; also the
/// backend of choice for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<String>>,
}

impl MemoryStorage {
    /// Creates an empty slot
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot pre-populated with raw contents, valid or not
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(contents.into())),
        }
    }

    /// Returns a copy of the raw slot contents
    pub fn contents(&self) -> Option<String> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Option<String>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn load_board(&self) -> Result<Option<Board>> {
        let contents = self.lock().clone();
        match contents {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    async fn save_board(&self, board: &Board) -> Result<()> {
        let json = serde_json::to_string(board)?;
        *self.lock() = Some(json);
        Ok(())
    }
}
