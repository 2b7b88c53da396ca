//! Identifier types for the task domain.

use crate::store::record_id;

record_id!(
    /// Unique identifier for a task record.
    TaskId
);
