//! Error types for project validation.

use thiserror::Error;

/// Errors raised by the project validation stage before persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectValidationError {
    /// The project title is empty after trimming.
    #[error("title is required")]
    EmptyTitle,
}
