use crate::domain::board::{Board, Column, ColumnId};
use crate::domain::task::{Category, Priority, Task, TaskId};
use crate::error::Result;
use crate::storage::Storage;
use chrono::NaiveDate;
use std::sync::Arc;

/// Kind of item being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    Task,
    Column,
}

/// A container position a drag started from or ended at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTarget {
    pub container_id: String,
    pub index: usize,
}

impl DropTarget {
    pub fn new(container_id: impl Into<String>, index: usize) -> Self {
        Self {
            container_id: container_id.into(),
            index,
        }
    }
}

/// Drag-end event reported by the presentation layer.
///
/// `destination` is `None` when the item was dropped outside any container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEnd {
    pub kind: DragKind,
    pub dragged_id: String,
    pub source: DropTarget,
    pub destination: Option<DropTarget>,
}

/// Owns the current board value and the injected storage backend.
///
/// Every operation derives a new board from the current one, swaps it in
/// and writes a full snapshot through the backend. A failed write is
/// logged and swallowed; the in-memory board always wins.
pub struct BoardStore {
    board: Board,
    storage: Arc<dyn Storage>,
}

impl BoardStore {
    /// Loads the last saved board, falling back to the seed board when no
    /// usable snapshot exists.
    pub async fn load(storage: Arc<dyn Storage>) -> Self {
        let board = match storage.load_board().await {
            Ok(Some(board)) => match board.validate() {
                Ok(()) => board,
                Err(err) => {
                    tracing::warn!(error = %err, "saved board failed validation, starting from seed data");
                    Board::seed()
                }
            },
            Ok(None) => Board::seed(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to load saved board, starting from seed data");
                Board::seed()
            }
        };
        Self { board, storage }
    }

    /// The current board value
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Swaps in the new board and persists it, unless nothing changed
    async fn commit(&mut self, board: Board) {
        if board == self.board {
            return;
        }
        self.board = board;
        if let Err(err) = self.storage.save_board(&self.board).await {
            tracing::warn!(error = %err, "failed to persist board snapshot");
        }
    }

    /// Moves a column to a new position in the column order
    pub async fn move_column(
        &mut self,
        column_id: &ColumnId,
        from_index: usize,
        to_index: usize,
    ) -> Result<()> {
        let board = self.board.move_column(column_id, from_index, to_index)?;
        self.commit(board).await;
        Ok(())
    }

    /// Moves a task between positions, within one column or across two
    pub async fn move_task(
        &mut self,
        task_id: &TaskId,
        source_column_id: &ColumnId,
        source_index: usize,
        dest_column_id: &ColumnId,
        dest_index: usize,
    ) -> Result<()> {
        let board = self.board.move_task(
            task_id,
            source_column_id,
            source_index,
            dest_column_id,
            dest_index,
        )?;
        self.commit(board).await;
        Ok(())
    }

    /// Creates a task at the bottom of the given column and returns it
    pub async fn add_task(
        &mut self,
        column_id: &ColumnId,
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        priority: Priority,
        due_date: NaiveDate,
    ) -> Result<Task> {
        let (board, task) =
            self.board
                .add_task(column_id, title, description, category, priority, due_date)?;
        self.commit(board).await;
        Ok(task)
    }

    /// Replaces the mutable fields of an existing task. An unknown id is a
    /// stale reference and leaves the board unchanged.
    pub async fn update_task(
        &mut self,
        task_id: &TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        priority: Priority,
        due_date: NaiveDate,
    ) {
        if !self.board.tasks.contains_key(task_id) {
            tracing::warn!(task_id = %task_id, "update ignored for unknown task id");
        }
        let board = self
            .board
            .update_task(task_id, title, description, category, priority, due_date);
        self.commit(board).await;
    }

    /// Removes a task from its column and the task table. An unknown id
    /// leaves the board unchanged.
    pub async fn delete_task(&mut self, task_id: &TaskId) {
        let board = self.board.delete_task(task_id);
        self.commit(board).await;
    }

    /// Creates an empty column at the end of the board and returns it
    pub async fn add_column(&mut self, title: impl Into<String>) -> Column {
        let (board, column) = self.board.add_column(title);
        self.commit(board).await;
        column
    }

    /// Removes a column and every task it contained. An unknown id leaves
    /// the board unchanged.
    pub async fn delete_column(&mut self, column_id: &ColumnId) {
        let board = self.board.delete_column(column_id);
        self.commit(board).await;
    }

    /// Routes a drag-end event to the matching reorder operation.
    ///
    /// Drops without a destination and drops back onto the source position
    /// leave the board unchanged.
    pub async fn handle_drag_end(&mut self, event: DragEnd) -> Result<()> {
        let Some(destination) = event.destination else {
            return Ok(());
        };
        if destination.container_id == event.source.container_id
            && destination.index == event.source.index
        {
            return Ok(());
        }

        match event.kind {
            DragKind::Column => {
                let column_id = ColumnId::new(event.dragged_id);
                self.move_column(&column_id, event.source.index, destination.index)
                    .await
            }
            DragKind::Task => {
                let task_id = TaskId::new(event.dragged_id);
                let source_column_id = ColumnId::new(event.source.container_id);
                let dest_column_id = ColumnId::new(destination.container_id);
                self.move_task(
                    &task_id,
                    &source_column_id,
                    event.source.index,
                    &dest_column_id,
                    destination.index,
                )
                .await
            }
        }
    }
}
