//! Domain model for projects.

mod error;
mod project;

pub use error::ProjectValidationError;
pub use project::{DEFAULT_PROJECT_COLOR, NewProject, Project, ProjectId, ProjectPatch};
