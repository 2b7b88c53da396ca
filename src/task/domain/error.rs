//! Error types for task validation and parsing.

use thiserror::Error;

/// Errors raised by the task validation stage before persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskValidationError {
    /// The task title is empty after trimming.
    #[error("title is required")]
    EmptyTitle,

    /// The status is not one of the board columns.
    #[error("unknown task status '{0}', expected todo, in-progress or done")]
    UnknownStatus(String),

    /// Several rules failed at once.
    #[error("multiple validation errors: {}", format_errors(.0))]
    Multiple(Vec<TaskValidationError>),
}

impl TaskValidationError {
    /// Combines collected errors, unwrapping a single error.
    #[must_use]
    pub fn multiple(mut errors: Vec<Self>) -> Self {
        if errors.len() == 1
            && let Some(error) = errors.pop()
        {
            return error;
        }
        Self::Multiple(errors)
    }
}

fn format_errors(errors: &[TaskValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Error returned while parsing a task priority.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);
