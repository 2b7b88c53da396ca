//! Column grouping and search filtering.

use super::Column;
use crate::task::domain::Task;

/// Returns the tasks whose title or description contains `query`, ignoring
/// case, in input order. An empty query returns the input unchanged.
#[must_use]
pub fn filter_by_search(tasks: &[Task], query: &str) -> Vec<Task> {
    if query.is_empty() {
        return tasks.to_vec();
    }
    tasks
        .iter()
        .filter(|task| task.matches_query(query))
        .cloned()
        .collect()
}

/// Tasks belonging to one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnGroup {
    /// The column.
    pub column: Column,
    /// Tasks in the column, in input order.
    pub tasks: Vec<Task>,
}

/// Partitions `tasks` into one group per entry of `columns`.
///
/// Each group keeps the relative input order. Tasks whose status matches
/// none of the columns, including unrecognized statuses, appear in no
/// group.
#[must_use]
pub fn group_by_status(tasks: &[Task], columns: &[Column]) -> Vec<ColumnGroup> {
    columns
        .iter()
        .map(|&column| ColumnGroup {
            column,
            tasks: tasks
                .iter()
                .filter(|task| Column::for_status(task.status()) == Some(column))
                .cloned()
                .collect(),
        })
        .collect()
}

/// A project's tasks filtered by a search query and grouped into the
/// board's columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    groups: Vec<ColumnGroup>,
}

impl Board {
    /// Builds the board from a flat task list and a search query.
    #[must_use]
    pub fn project(tasks: &[Task], query: &str) -> Self {
        let visible = filter_by_search(tasks, query);
        Self {
            groups: group_by_status(&visible, &Column::ALL),
        }
    }

    /// Returns the column groups in board order.
    #[must_use]
    pub fn groups(&self) -> &[ColumnGroup] {
        &self.groups
    }

    /// Returns the tasks of one column.
    #[must_use]
    pub fn column(&self, column: Column) -> &[Task] {
        self.groups
            .iter()
            .find(|group| group.column == column)
            .map(|group| group.tasks.as_slice())
            .unwrap_or_default()
    }

    /// Returns the number of tasks shown across all columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.iter().map(|group| group.tasks.len()).sum()
    }

    /// Returns `true` when no column shows any task.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
