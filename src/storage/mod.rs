use crate::{domain::Board, error::Result};
use async_trait::async_trait;

pub mod file_storage;
pub mod memory_storage;

/// Storage trait for persisting board snapshots
#[async_trait]
pub trait Storage: Send + Sync {
    /// Loads the last saved board snapshot, if one exists
    async fn load_board(&self) -> Result<Option<Board>>;

    /// Saves a full board snapshot, replacing the previous one
    async fn save_board(&self, board: &Board) -> Result<()>;
}
