//! Board columns.

use crate::task::domain::TaskStatus;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A status-scoped bucket on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    /// Tasks with status `todo`.
    #[serde(rename = "todo")]
    Todo,
    /// Tasks with status `in-progress`.
    #[serde(rename = "in-progress")]
    InProgress,
    /// Tasks with status `done`.
    #[serde(rename = "done")]
    Done,
}

impl Column {
    /// The fixed column order of the board.
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// Returns the column identifier, identical to the status string.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }

    /// Returns the display title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Returns the status a task gets when dropped into this column.
    #[must_use]
    pub const fn status(self) -> TaskStatus {
        match self {
            Self::Todo => TaskStatus::Todo,
            Self::InProgress => TaskStatus::InProgress,
            Self::Done => TaskStatus::Done,
        }
    }

    /// Returns the column holding tasks with `status`, or `None` for a
    /// status the board does not show.
    #[must_use]
    pub const fn for_status(status: &TaskStatus) -> Option<Self> {
        match status {
            TaskStatus::Todo => Some(Self::Todo),
            TaskStatus::InProgress => Some(Self::InProgress),
            TaskStatus::Done => Some(Self::Done),
            TaskStatus::Unrecognized(_) => None,
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
