//! Repository port for assignee persistence and lookup.

use crate::assignee::domain::{Assignee, AssigneeId, AssigneePatch, ValidatedAssignee};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for assignee repository operations.
pub type AssigneeRepositoryResult<T> = Result<T, AssigneeRepositoryError>;

/// Assignee persistence contract.
#[async_trait]
pub trait AssigneeRepository: Send + Sync {
    /// Returns every assignee in insertion order.
    async fn all(&self) -> AssigneeRepositoryResult<Vec<Assignee>>;

    /// Finds an assignee by identifier.
    async fn find_by_id(&self, id: AssigneeId) -> AssigneeRepositoryResult<Option<Assignee>>;

    /// Stores a new assignee under the next identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AssigneeRepositoryError::DuplicateEmail`] when a stored
    /// assignee already uses the email, ignoring case.
    async fn create(
        &self,
        input: ValidatedAssignee,
        now: DateTime<Utc>,
    ) -> AssigneeRepositoryResult<Assignee>;

    /// Applies `patch` to the stored assignee and returns the result.
    async fn update(
        &self,
        id: AssigneeId,
        patch: AssigneePatch,
    ) -> AssigneeRepositoryResult<Option<Assignee>>;

    /// Removes an assignee and returns it.
    async fn delete(&self, id: AssigneeId) -> AssigneeRepositoryResult<Option<Assignee>>;
}

/// Errors returned by assignee repository implementations.
#[derive(Debug, Clone, Error)]
pub enum AssigneeRepositoryError {
    /// Another assignee already uses the email.
    #[error("An assignee with this email already exists")]
    DuplicateEmail(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AssigneeRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
