use crate::domain::board::{Board, ColumnId};
use crate::domain::task::{Category, Priority};

/// Task counts per priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PriorityBreakdown {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// Task counts per category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryBreakdown {
    pub feature: usize,
    pub bug: usize,
    pub task: usize,
    pub improvement: usize,
}

/// Aggregate counts for the statistics dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct BoardStats {
    pub total_tasks: usize,
    pub todo_tasks: usize,
    pub in_progress_tasks: usize,
    pub completed_tasks: usize,
    pub completion_percentage: f64,
    pub by_priority: PriorityBreakdown,
    pub by_category: CategoryBreakdown,
}

impl BoardStats {
    /// Derives the dashboard figures from a board.
    ///
    /// To-do, in-progress and completed counts are inferred from column
    /// position: the first column counts as to-do, the second as in
    /// progress and the last as completed. Renaming or reordering columns
    /// shifts these figures accordingly; there is no status field to pin
    /// them to.
    pub fn from_board(board: &Board) -> Self {
        let total_tasks = board.tasks.len();

        let count_at = |column_id: Option<&ColumnId>| {
            column_id
                .and_then(|id| board.columns.get(id))
                .map_or(0, |column| column.task_ids.len())
        };
        let todo_tasks = count_at(board.column_order.first());
        let in_progress_tasks = count_at(board.column_order.get(1));
        let completed_tasks = count_at(board.column_order.last());

        let completion_percentage = if total_tasks > 0 {
            (completed_tasks as f64) / (total_tasks as f64) * 100.0
        } else {
            0.0
        };

        let mut by_priority = PriorityBreakdown::default();
        let mut by_category = CategoryBreakdown::default();
        for task in board.tasks.values() {
            match task.priority {
                Priority::High => by_priority.high += 1,
                Priority::Medium => by_priority.medium += 1,
                Priority::Low => by_priority.low += 1,
            }
            match task.category {
                Category::Feature => by_category.feature += 1,
                Category::Bug => by_category.bug += 1,
                Category::Task => by_category.task += 1,
                Category::Improvement => by_category.improvement += 1,
            }
        }

        Self {
            total_tasks,
            todo_tasks,
            in_progress_tasks,
            completed_tasks,
            completion_percentage,
            by_priority,
            by_category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_board_stats() {
        let stats = BoardStats::from_board(&Board::seed());

        assert_eq!(stats.total_tasks, 5);
        assert_eq!(stats.todo_tasks, 3);
        assert_eq!(stats.in_progress_tasks, 1);
        assert_eq!(stats.completed_tasks, 1);
        assert_eq!(stats.completion_percentage, 20.0);
    }

    #[test]
    fn test_seed_board_breakdowns() {
        let stats = BoardStats::from_board(&Board::seed());

        assert_eq!(
            stats.by_priority,
            PriorityBreakdown {
                high: 2,
                medium: 2,
                low: 1
            }
        );
        assert_eq!(
            stats.by_category,
            CategoryBreakdown {
                feature: 2,
                bug: 1,
                task: 1,
                improvement: 1
            }
        );
    }

    #[test]
    fn test_empty_board_stats() {
        let stats = BoardStats::from_board(&Board::new());

        assert_eq!(stats.total_tasks, 0);
        assert_eq!(stats.todo_tasks, 0);
        assert_eq!(stats.in_progress_tasks, 0);
        assert_eq!(stats.completed_tasks, 0);
        assert_eq!(stats.completion_percentage, 0.0);
    }

    #[test]
    fn test_counts_follow_column_position() {
        // moving the last column to the front changes which columns the
        // dashboard reads as to-do and completed
        let board = Board::seed();
        let done = board.column_order.last().unwrap().clone();
        let reordered = board.move_column(&done, 2, 0).unwrap();
        let stats = BoardStats::from_board(&reordered);

        assert_eq!(stats.todo_tasks, 1);
        assert_eq!(stats.in_progress_tasks, 3);
        assert_eq!(stats.completed_tasks, 1);
    }
}
