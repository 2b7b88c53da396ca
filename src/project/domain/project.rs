//! Project aggregate and its create/patch payloads.

use super::ProjectValidationError;
use crate::store::{Record, record_id};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

record_id!(
    /// Unique identifier for a project record.
    ProjectId
);

/// Display colour given to projects created without one.
pub const DEFAULT_PROJECT_COLOR: &str = "#5B6CFF";

/// Project aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    id: ProjectId,
    title: String,
    #[serde(default)]
    description: String,
    color: String,
    #[serde(default)]
    archived: bool,
    created_at: DateTime<Utc>,
}

impl Project {
    /// Creates an active project from a draft.
    #[must_use]
    pub fn create(id: ProjectId, draft: NewProject, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            color: draft.color,
            archived: false,
            created_at,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the display colour token.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns `true` when the project is archived.
    #[must_use]
    pub const fn is_archived(&self) -> bool {
        self.archived
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Merges `patch` onto the project; absent fields are kept.
    pub fn apply(&mut self, patch: ProjectPatch) {
        let ProjectPatch {
            title,
            description,
            color,
            archived,
        } = patch;
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(color) = color {
            self.color = color;
        }
        if let Some(archived) = archived {
            self.archived = archived;
        }
    }
}

impl Record for Project {
    type Id = ProjectId;

    fn id(&self) -> ProjectId {
        self.id
    }
}

/// Draft for a new project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    title: String,
    description: String,
    color: String,
}

impl NewProject {
    /// Creates a draft with the default colour and no description.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            color: DEFAULT_PROJECT_COLOR.to_owned(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the display colour.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Checks the draft before it is stored.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectValidationError::EmptyTitle`] when the title is
    /// blank.
    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        validate_title(Some(&self.title))
    }
}

/// Partial update for a project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    title: Option<String>,
    description: Option<String>,
    color: Option<String>,
    archived: Option<bool>,
}

impl ProjectPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the display colour.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the archived flag.
    #[must_use]
    pub const fn with_archived(mut self, archived: bool) -> Self {
        self.archived = Some(archived);
        self
    }

    /// Checks the patch before it is applied.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectValidationError::EmptyTitle`] when the patch blanks
    /// the title.
    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        validate_title(self.title.as_deref())
    }
}

fn validate_title(title: Option<&str>) -> Result<(), ProjectValidationError> {
    match title {
        Some(value) if value.trim().is_empty() => Err(ProjectValidationError::EmptyTitle),
        _ => Ok(()),
    }
}
