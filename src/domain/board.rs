use crate::domain::task::{Category, Priority, Task, TaskId};
use crate::error::{Result, TableroError};
use chrono::{Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a column (e.g., column-9b1deb4d-3b7d-4bad-9bdd-2b0d7b3dcb6d)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnId(String);

impl ColumnId {
    const PREFIX: &'static str = "column";

    /// Generates a fresh random id
    pub fn generate() -> Self {
        Self(format!("{}-{}", Self::PREFIX, Uuid::new_v4()))
    }

    /// Wraps an existing id string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A board column holding an ordered run of task ids, top to bottom
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub task_ids: Vec<TaskId>,
}

impl Column {
    /// Creates an empty column with a fresh id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ColumnId::generate(),
            title: title.into(),
            task_ids: Vec::new(),
        }
    }
}

/// Kanban board state.
///
/// The aggregate root: a task table, a column table and the left-to-right
/// column order. Every mutation derives a new `Board` value from the
/// previous one; no operation mutates its receiver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub tasks: HashMap<TaskId, Task>,
    pub columns: HashMap<ColumnId, Column>,
    pub column_order: Vec<ColumnId>,
}

impl Board {
    /// Creates an empty board
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
            columns: HashMap::new(),
            column_order: Vec::new(),
        }
    }

    /// The board a fresh install starts from: "To Do", "In Progress" and
    /// "Done" columns pre-populated with five sample tasks.
    pub fn seed() -> Self {
        let today = Utc::now().date_naive();
        let sample = |id: &str,
                      title: &str,
                      description: &str,
                      category: Category,
                      priority: Priority,
                      days_out: i64| Task {
            id: TaskId::new(id),
            title: title.to_string(),
            description: description.to_string(),
            category,
            priority,
            due_date: today + Duration::days(days_out),
            created_at: Utc::now(),
        };

        let samples = [
            sample(
                "task-1",
                "Create project structure",
                "Set up the initial project structure and dependencies",
                Category::Task,
                Priority::High,
                1,
            ),
            sample(
                "task-2",
                "Design UI components",
                "Create the UI components for the kanban board",
                Category::Feature,
                Priority::Medium,
                2,
            ),
            sample(
                "task-3",
                "Implement drag and drop",
                "Add drag and drop support to the kanban board",
                Category::Feature,
                Priority::High,
                3,
            ),
            sample(
                "task-4",
                "Fix responsive layout",
                "Make the kanban board responsive on all devices",
                Category::Bug,
                Priority::Medium,
                1,
            ),
            sample(
                "task-5",
                "Add task filtering",
                "Filter tasks by category and priority",
                Category::Improvement,
                Priority::Low,
                5,
            ),
        ];

        let column = |id: &str, title: &str, task_ids: &[&str]| Column {
            id: ColumnId::new(id),
            title: title.to_string(),
            task_ids: task_ids.iter().copied().map(TaskId::new).collect(),
        };

        let columns = [
            column("column-1", "To Do", &["task-1", "task-2", "task-3"]),
            column("column-2", "In Progress", &["task-4"]),
            column("column-3", "Done", &["task-5"]),
        ];

        Self {
            tasks: samples.into_iter().map(|t| (t.id.clone(), t)).collect(),
            column_order: columns.iter().map(|c| c.id.clone()).collect(),
            columns: columns.into_iter().map(|c| (c.id.clone(), c)).collect(),
        }
    }

    /// Checks the board's structural invariants: the column order is a
    /// permutation of the column table's keys, and every task sits in
    /// exactly one column and the task table.
    pub fn validate(&self) -> Result<()> {
        if self.column_order.len() != self.columns.len() {
            return Err(TableroError::InvalidSnapshot(format!(
                "column order lists {} columns but the table holds {}",
                self.column_order.len(),
                self.columns.len()
            )));
        }

        let mut ordered = HashSet::new();
        for column_id in &self.column_order {
            if !self.columns.contains_key(column_id) {
                return Err(TableroError::InvalidSnapshot(format!(
                    "column order references unknown column {column_id}"
                )));
            }
            if !ordered.insert(column_id) {
                return Err(TableroError::InvalidSnapshot(format!(
                    "column {column_id} appears twice in the column order"
                )));
            }
        }

        let mut placed = HashSet::new();
        for column in self.columns.values() {
            for task_id in &column.task_ids {
                if !self.tasks.contains_key(task_id) {
                    return Err(TableroError::InvalidSnapshot(format!(
                        "column {} references unknown task {task_id}",
                        column.id
                    )));
                }
                if !placed.insert(task_id) {
                    return Err(TableroError::InvalidSnapshot(format!(
                        "task {task_id} is listed in more than one column"
                    )));
                }
            }
        }
        if placed.len() != self.tasks.len() {
            return Err(TableroError::InvalidSnapshot(format!(
                "{} of {} tasks are not listed in any column",
                self.tasks.len() - placed.len(),
                self.tasks.len()
            )));
        }

        Ok(())
    }

    /// Moves a column from one position in the column order to another.
    ///
    /// Returns the board unchanged when source and destination are the same
    /// position.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIndex` when either position is out of range.
    pub fn move_column(
        &self,
        column_id: &ColumnId,
        from_index: usize,
        to_index: usize,
    ) -> Result<Self> {
        let len = self.column_order.len();
        if from_index >= len {
            return Err(TableroError::InvalidIndex {
                index: from_index,
                len,
            });
        }
        if to_index >= len {
            return Err(TableroError::InvalidIndex { index: to_index, len });
        }
        if from_index == to_index {
            return Ok(self.clone());
        }

        let mut board = self.clone();
        board.column_order.remove(from_index);
        board.column_order.insert(to_index, column_id.clone());
        Ok(board)
    }

    /// Moves a task between positions, within one column or across two.
    ///
    /// A same-column move is a remove-then-insert on one list, so an element
    /// moving later shifts one position left before its target index
    /// applies. An unknown source or destination column is a stale
    /// reference and returns the board unchanged, as does a move to the
    /// identical position.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIndex` when either position is out of range.
    pub fn move_task(
        &self,
        task_id: &TaskId,
        source_column_id: &ColumnId,
        source_index: usize,
        dest_column_id: &ColumnId,
        dest_index: usize,
    ) -> Result<Self> {
        if source_column_id == dest_column_id && source_index == dest_index {
            return Ok(self.clone());
        }

        let Some(source) = self.columns.get(source_column_id) else {
            return Ok(self.clone());
        };
        let source_len = source.task_ids.len();
        if source_index >= source_len {
            return Err(TableroError::InvalidIndex {
                index: source_index,
                len: source_len,
            });
        }

        if source_column_id == dest_column_id {
            // one list, one element shorter once the task is detached
            if dest_index >= source_len {
                return Err(TableroError::InvalidIndex {
                    index: dest_index,
                    len: source_len,
                });
            }
            let mut column = source.clone();
            column.task_ids.remove(source_index);
            column.task_ids.insert(dest_index, task_id.clone());

            let mut board = self.clone();
            board.columns.insert(column.id.clone(), column);
            return Ok(board);
        }

        let Some(dest) = self.columns.get(dest_column_id) else {
            return Ok(self.clone());
        };
        if dest_index > dest.task_ids.len() {
            return Err(TableroError::InvalidIndex {
                index: dest_index,
                len: dest.task_ids.len(),
            });
        }

        let mut source = source.clone();
        let mut dest = dest.clone();
        source.task_ids.remove(source_index);
        dest.task_ids.insert(dest_index, task_id.clone());

        let mut board = self.clone();
        board.columns.insert(source.id.clone(), source);
        board.columns.insert(dest.id.clone(), dest);
        Ok(board)
    }

    /// Creates a task and appends it to the bottom of the given column.
    ///
    /// # Errors
    ///
    /// Returns `ColumnNotFound` when the column does not exist.
    pub fn add_task(
        &self,
        column_id: &ColumnId,
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        priority: Priority,
        due_date: NaiveDate,
    ) -> Result<(Self, Task)> {
        let Some(column) = self.columns.get(column_id) else {
            return Err(TableroError::ColumnNotFound(column_id.to_string()));
        };

        let task = Task::new(title, description, category, priority, due_date);
        let mut column = column.clone();
        column.task_ids.push(task.id.clone());

        let mut board = self.clone();
        board.tasks.insert(task.id.clone(), task.clone());
        board.columns.insert(column.id.clone(), column);
        Ok((board, task))
    }

    /// Replaces the mutable fields of an existing task, preserving its id
    /// and creation time. Returns the board unchanged when the task does
    /// not exist.
    pub fn update_task(
        &self,
        task_id: &TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        priority: Priority,
        due_date: NaiveDate,
    ) -> Self {
        let Some(task) = self.tasks.get(task_id) else {
            return self.clone();
        };

        let updated = task.with_details(title, description, category, priority, due_date);
        let mut board = self.clone();
        board.tasks.insert(task_id.clone(), updated);
        board
    }

    /// Removes a task from its containing column and the task table.
    /// Returns the board unchanged when no column contains the task.
    pub fn delete_task(&self, task_id: &TaskId) -> Self {
        let Some(column) = self
            .columns
            .values()
            .find(|column| column.task_ids.contains(task_id))
        else {
            return self.clone();
        };

        let mut column = column.clone();
        column.task_ids.retain(|id| id != task_id);

        let mut board = self.clone();
        board.tasks.remove(task_id);
        board.columns.insert(column.id.clone(), column);
        board
    }

    /// Creates an empty column and appends it to the end of the column order
    pub fn add_column(&self, title: impl Into<String>) -> (Self, Column) {
        let column = Column::new(title);

        let mut board = self.clone();
        board.column_order.push(column.id.clone());
        board.columns.insert(column.id.clone(), column.clone());
        (board, column)
    }

    /// Removes a column and cascades: every task the column listed is
    /// deleted from the task table. Returns the board unchanged when the
    /// column does not exist.
    pub fn delete_column(&self, column_id: &ColumnId) -> Self {
        let Some(column) = self.columns.get(column_id) else {
            return self.clone();
        };

        let mut board = self.clone();
        for task_id in &column.task_ids {
            board.tasks.remove(task_id);
        }
        board.columns.remove(column_id);
        board.column_order.retain(|id| id != column_id);
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
