//! Error types for assignee validation.

use thiserror::Error;

/// Errors raised while validating a new assignee.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssigneeValidationError {
    /// The name or the email is blank.
    #[error("Name and email are required")]
    MissingRequiredField,

    /// The email is not of the form `local@domain.tld`.
    #[error("Please enter a valid email address")]
    InvalidEmail(String),
}
