pub mod board;
pub mod filter;
pub mod stats;
pub mod task;

pub use board::{Board, Column, ColumnId};
pub use filter::{filter_tasks, tasks_by_due_date, TaskFilter};
pub use stats::{BoardStats, CategoryBreakdown, PriorityBreakdown};
pub use task::{Category, Priority, Task, TaskId};
