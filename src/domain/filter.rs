use crate::domain::board::Board;
use crate::domain::task::{Category, Priority, Task};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Filter over the board's tasks, as offered by the calendar view
#[derive(Debug, Clone, PartialEq)]
pub enum TaskFilter {
    All,
    Priority(Priority),
    Category(Category),
    /// Tasks in the column with this title, matched case-insensitively
    Column(String),
}

/// Tasks in display order: columns left to right, each top to bottom
fn tasks_in_board_order(board: &Board) -> impl Iterator<Item = &Task> {
    board
        .column_order
        .iter()
        .filter_map(|id| board.columns.get(id))
        .flat_map(|column| column.task_ids.iter())
        .filter_map(|id| board.tasks.get(id))
}

/// Returns the tasks matching the filter, in display order.
///
/// A column filter naming no existing column matches nothing.
pub fn filter_tasks<'a>(board: &'a Board, filter: &TaskFilter) -> Vec<&'a Task> {
    match filter {
        TaskFilter::All => tasks_in_board_order(board).collect(),
        TaskFilter::Priority(priority) => tasks_in_board_order(board)
            .filter(|task| task.priority == *priority)
            .collect(),
        TaskFilter::Category(category) => tasks_in_board_order(board)
            .filter(|task| task.category == *category)
            .collect(),
        TaskFilter::Column(title) => {
            let wanted = title.to_lowercase();
            board
                .columns
                .values()
                .find(|column| column.title.to_lowercase() == wanted)
                .map(|column| {
                    column
                        .task_ids
                        .iter()
                        .filter_map(|id| board.tasks.get(id))
                        .collect()
                })
                .unwrap_or_default()
        }
    }
}

/// Groups every task by its due date, dates in chronological order
pub fn tasks_by_due_date(board: &Board) -> BTreeMap<NaiveDate, Vec<&Task>> {
    let mut grouped: BTreeMap<NaiveDate, Vec<&Task>> = BTreeMap::new();
    for task in tasks_in_board_order(board) {
        grouped.entry(task.due_date).or_default().push(task);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_all_follows_display_order() {
        let board = Board::seed();
        let tasks = filter_tasks(&board, &TaskFilter::All);

        assert_eq!(
            tasks.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(),
            vec!["task-1", "task-2", "task-3", "task-4", "task-5"]
        );
    }

    #[test]
    fn test_filter_by_priority() {
        let board = Board::seed();
        let tasks = filter_tasks(&board, &TaskFilter::Priority(Priority::High));

        assert_eq!(
            tasks.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(),
            vec!["task-1", "task-3"]
        );
    }

    #[test]
    fn test_filter_by_category() {
        let board = Board::seed();
        let tasks = filter_tasks(&board, &TaskFilter::Category(Category::Improvement));

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id.as_str(), "task-5");
    }

    #[test]
    fn test_filter_by_column_title_is_case_insensitive() {
        let board = Board::seed();
        let tasks = filter_tasks(&board, &TaskFilter::Column("in progress".to_string()));

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id.as_str(), "task-4");
    }

    #[test]
    fn test_filter_by_unknown_column_matches_nothing() {
        let board = Board::seed();
        let tasks = filter_tasks(&board, &TaskFilter::Column("Archived".to_string()));

        assert!(tasks.is_empty());
    }

    #[test]
    fn test_tasks_grouped_by_due_date() {
        let board = Board::seed();
        let grouped = tasks_by_due_date(&board);

        // seed due dates: +1 (two tasks), +2, +3, +5 days out
        assert_eq!(grouped.len(), 4);
        let per_day: Vec<usize> = grouped.values().map(Vec::len).collect();
        assert_eq!(per_day, vec![2, 1, 1, 1]);
        assert_eq!(grouped.values().flatten().count(), 5);

        let mut dates: Vec<NaiveDate> = grouped.keys().copied().collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
        dates.dedup();
        assert_eq!(dates.len(), 4);
    }
}
