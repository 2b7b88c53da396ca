//! Repository port for project persistence and lookup.

use crate::project::domain::{NewProject, Project, ProjectId, ProjectPatch};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for project repository operations.
pub type ProjectRepositoryResult<T> = Result<T, ProjectRepositoryError>;

/// Project persistence contract.
///
/// Unknown identifiers yield `Ok(None)`.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Returns every project in insertion order.
    async fn all(&self) -> ProjectRepositoryResult<Vec<Project>>;

    /// Finds a project by identifier.
    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>>;

    /// Allocates the next identifier and stores the project built from
    /// `draft`.
    async fn create(
        &self,
        draft: NewProject,
        now: DateTime<Utc>,
    ) -> ProjectRepositoryResult<Project>;

    /// Applies `patch` to the stored project and returns the result.
    async fn update(
        &self,
        id: ProjectId,
        patch: ProjectPatch,
    ) -> ProjectRepositoryResult<Option<Project>>;

    /// Removes a project and returns it.
    async fn delete(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>>;
}

/// Errors returned by project repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ProjectRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProjectRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
