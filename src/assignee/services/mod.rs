//! Application services for the assignee directory.

mod directory;

pub use directory::{AssigneeDirectoryError, AssigneeDirectoryResult, AssigneeDirectoryService};
