//! # Tablero Core
//!
//! Core board state and domain models for Tablero kanban task boards.
//!
//! This crate provides the board aggregate (tasks, columns and their
//! left-to-right order), the invariant-preserving operations behind task
//! CRUD and drag-and-drop reordering, read-only aggregation views for the
//! statistics and calendar pages, and snapshot persistence, without any
//! dependency on a specific UI or rendering layer.

pub mod domain;
pub mod error;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use domain::{
    board::{Board, Column, ColumnId},
    filter::{filter_tasks, tasks_by_due_date, TaskFilter},
    stats::BoardStats,
    task::{Category, Priority, Task, TaskId},
};
pub use error::{Result, TableroError};
pub use storage::Storage;
pub use store::{BoardStore, DragEnd, DragKind, DropTarget};
