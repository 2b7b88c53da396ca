//! Port contracts for assignee storage.

pub mod repository;

pub use repository::{AssigneeRepository, AssigneeRepositoryError, AssigneeRepositoryResult};
