//! In-memory assignee storage.

mod directory;

pub use directory::InMemoryAssigneeRepository;
