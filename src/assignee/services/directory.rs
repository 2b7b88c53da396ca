//! Assignee directory service.

use crate::{
    assignee::{
        domain::{Assignee, AssigneeId, AssigneePatch, AssigneeValidationError, NewAssignee},
        ports::{AssigneeRepository, AssigneeRepositoryError},
    },
    store::RecordKey,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for assignee operations.
#[derive(Debug, Error)]
pub enum AssigneeDirectoryError {
    /// The input failed validation.
    #[error(transparent)]
    Validation(#[from] AssigneeValidationError),
    /// Repository operation failed, including duplicate emails.
    #[error(transparent)]
    Repository(#[from] AssigneeRepositoryError),
}

impl AssigneeDirectoryError {
    /// Returns `true` when the failure is a duplicate email.
    #[must_use]
    pub const fn is_duplicate_email(&self) -> bool {
        matches!(
            self,
            Self::Repository(AssigneeRepositoryError::DuplicateEmail(_))
        )
    }
}

/// Result type for assignee directory operations.
pub type AssigneeDirectoryResult<T> = Result<T, AssigneeDirectoryError>;

/// Assignee directory orchestration service.
pub struct AssigneeDirectoryService<R, C>
where
    R: AssigneeRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for AssigneeDirectoryService<R, C>
where
    R: AssigneeRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> AssigneeDirectoryService<R, C>
where
    R: AssigneeRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new assignee directory service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns every assignee in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AssigneeDirectoryError::Repository`] when the store fails.
    pub async fn all(&self) -> AssigneeDirectoryResult<Vec<Assignee>> {
        Ok(self.repository.all().await?)
    }

    /// Finds an assignee by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AssigneeDirectoryError::Repository`] when the store fails.
    pub async fn find_by_id(&self, id: AssigneeId) -> AssigneeDirectoryResult<Option<Assignee>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Finds an assignee by a loosely formatted key such as `"2"`.
    ///
    /// # Errors
    ///
    /// Returns [`AssigneeDirectoryError::Repository`] when the store fails.
    pub async fn find_by_key(&self, key: &str) -> AssigneeDirectoryResult<Option<Assignee>> {
        match AssigneeId::coerce(key) {
            Some(id) => self.find_by_id(id).await,
            None => Ok(None),
        }
    }

    /// Validates and stores a new assignee.
    ///
    /// # Errors
    ///
    /// Returns [`AssigneeDirectoryError::Validation`] when a required field
    /// is blank or the email is malformed, and
    /// [`AssigneeDirectoryError::Repository`] with
    /// [`AssigneeRepositoryError::DuplicateEmail`] when the email is taken.
    pub async fn create(&self, input: NewAssignee) -> AssigneeDirectoryResult<Assignee> {
        let validated = input.validate().inspect_err(|err| {
            tracing::warn!(error = %err, "rejected assignee");
        })?;
        let assignee = self
            .repository
            .create(validated, self.clock.utc())
            .await
            .inspect_err(|err| tracing::warn!(error = %err, "assignee not stored"))?;
        tracing::info!(assignee_id = %assignee.id(), "created assignee");
        Ok(assignee)
    }

    /// Merges a partial update onto an assignee.
    ///
    /// # Errors
    ///
    /// Returns [`AssigneeDirectoryError::Repository`] when the store fails.
    pub async fn update(
        &self,
        id: AssigneeId,
        patch: AssigneePatch,
    ) -> AssigneeDirectoryResult<Option<Assignee>> {
        Ok(self.repository.update(id, patch).await?)
    }

    /// Removes an assignee and returns it.
    ///
    /// Tasks assigned to the removed assignee keep the dangling reference.
    ///
    /// # Errors
    ///
    /// Returns [`AssigneeDirectoryError::Repository`] when the store fails.
    pub async fn delete(&self, id: AssigneeId) -> AssigneeDirectoryResult<Option<Assignee>> {
        let deleted = self.repository.delete(id).await?;
        if deleted.is_some() {
            tracing::info!(assignee_id = %id, "deleted assignee");
        }
        Ok(deleted)
    }
}
