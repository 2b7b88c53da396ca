//! Domain model for assignees.

mod assignee;
mod error;

pub use assignee::{
    Assignee, AssigneeId, AssigneePatch, DEFAULT_AVATAR, DEFAULT_ROLE, NewAssignee,
    ValidatedAssignee,
};
pub use error::AssigneeValidationError;
