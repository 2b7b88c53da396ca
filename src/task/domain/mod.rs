//! Domain model for tasks.
//!
//! Tasks belong to a project, move freely between the `todo`,
//! `in-progress` and `done` statuses, and carry a completion timestamp that
//! is present exactly while they are done.

mod error;
mod ids;
mod status;
mod task;
mod validation;

pub use error::{ParseTaskPriorityError, TaskValidationError};
pub use ids::TaskId;
pub use status::{TaskPriority, TaskStatus};
pub use task::{NewTask, PersistedTaskData, Task, TaskPatch};
pub use validation::{validate_new_task, validate_patch};
