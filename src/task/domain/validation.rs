//! Validation stage run before task drafts and patches are persisted.
//!
//! Every rule is checked and the failures are collected, so a caller sees
//! all problems with a submission at once.

use super::{NewTask, TaskPatch, TaskStatus, TaskValidationError};

/// Validates a task draft.
///
/// # Errors
///
/// Returns [`TaskValidationError`] when the title is blank or the requested
/// status is not a board column.
pub fn validate_new_task(draft: &NewTask) -> Result<(), TaskValidationError> {
    collect([
        validate_title(Some(draft.title())),
        validate_status(draft.status()),
    ])
}

/// Validates a partial update.
///
/// # Errors
///
/// Returns [`TaskValidationError`] when the patch blanks the title or sets a
/// status that is not a board column.
pub fn validate_patch(patch: &TaskPatch) -> Result<(), TaskValidationError> {
    collect([
        validate_title(patch.title()),
        validate_status(patch.status()),
    ])
}

fn validate_title(title: Option<&str>) -> Result<(), TaskValidationError> {
    match title {
        Some(value) if value.trim().is_empty() => Err(TaskValidationError::EmptyTitle),
        _ => Ok(()),
    }
}

fn validate_status(status: Option<&TaskStatus>) -> Result<(), TaskValidationError> {
    match status {
        Some(TaskStatus::Unrecognized(value)) => {
            Err(TaskValidationError::UnknownStatus(value.clone()))
        }
        _ => Ok(()),
    }
}

fn collect<const N: usize>(
    results: [Result<(), TaskValidationError>; N],
) -> Result<(), TaskValidationError> {
    let errors: Vec<_> = results.into_iter().filter_map(Result::err).collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(TaskValidationError::multiple(errors))
    }
}
