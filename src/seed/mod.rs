//! Static seed data loaded once when a workspace starts.

use crate::{assignee::domain::Assignee, project::domain::Project, task::domain::Task};
use serde::Deserialize;
use thiserror::Error;

const FIXTURE: &str = include_str!("fixture.json");

/// Errors raised while loading seed data.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The fixture is not valid JSON for the record types.
    #[error("invalid seed fixture: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Records every store starts from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SeedData {
    /// Seed projects.
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Seed tasks.
    #[serde(default)]
    pub tasks: Vec<Task>,
    /// Seed assignees.
    #[serde(default)]
    pub assignees: Vec<Assignee>,
}

impl SeedData {
    /// Loads the fixture bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Parse`] if the bundled fixture is malformed.
    pub fn bundled() -> Result<Self, SeedError> {
        Self::from_json(FIXTURE)
    }

    /// Parses seed data from JSON.
    ///
    /// Records are taken as they are; no validation runs, so imported
    /// tasks may carry statuses the board does not show.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Parse`] when `json` does not describe seed data.
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }
}
