//! Repository port for task persistence and lookup.

use crate::{
    project::domain::ProjectId,
    task::domain::{NewTask, Task, TaskId, TaskPatch},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Lookups, updates and deletes of an unknown identifier return `Ok(None)`;
/// absence is never an error. Every returned task is an owned copy.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns every task in insertion order.
    async fn all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task by identifier.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns the tasks of a project in insertion order.
    async fn find_by_project(&self, project_id: ProjectId) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns tasks whose title or description contains `query`, ignoring
    /// case, in insertion order.
    async fn search(&self, query: &str) -> TaskRepositoryResult<Vec<Task>>;

    /// Allocates the next identifier, stores the task built from `draft`
    /// and returns it.
    async fn create(&self, draft: NewTask, now: DateTime<Utc>) -> TaskRepositoryResult<Task>;

    /// Applies `patch` to the stored task atomically and returns the result.
    ///
    /// The previous status used by the completion rule is the one stored at
    /// the moment the patch is applied.
    async fn update(
        &self,
        id: TaskId,
        patch: TaskPatch,
        now: DateTime<Utc>,
    ) -> TaskRepositoryResult<Option<Task>>;

    /// Removes a task and returns it.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
