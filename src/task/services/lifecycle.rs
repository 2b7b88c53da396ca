//! Task lifecycle service: validated CRUD, status transitions and queries.

use crate::{
    project::domain::ProjectId,
    store::RecordKey,
    task::{
        domain::{
            NewTask, Task, TaskId, TaskPatch, TaskStatus, TaskValidationError, validate_new_task,
            validate_patch,
        },
        ports::{TaskRepository, TaskRepositoryError},
    },
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// The draft or patch failed validation.
    #[error(transparent)]
    Validation(#[from] TaskValidationError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Mutating operations return the authoritative stored record; callers
/// holding a local view replace their copy with it rather than merging.
/// Operations on an unknown identifier return `Ok(None)`.
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns every task in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the store fails.
    pub async fn all(&self) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.all().await?)
    }

    /// Finds a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the store fails.
    pub async fn find_by_id(&self, id: TaskId) -> TaskLifecycleResult<Option<Task>> {
        tracing::debug!(task_id = %id, "looking up task");
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Finds a task by a loosely formatted key such as `"12"`.
    ///
    /// Keys without leading digits resolve to `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the store fails.
    pub async fn find_by_key(&self, key: &str) -> TaskLifecycleResult<Option<Task>> {
        match TaskId::coerce(key) {
            Some(id) => self.find_by_id(id).await,
            None => Ok(None),
        }
    }

    /// Returns the tasks of a project in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the store fails.
    pub async fn find_by_project(&self, project_id: ProjectId) -> TaskLifecycleResult<Vec<Task>> {
        tracing::debug!(project_id = %project_id, "loading project tasks");
        Ok(self.repository.find_by_project(project_id).await?)
    }

    /// Returns tasks whose title or description contains `query`, ignoring
    /// case. An empty query returns every task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the store fails.
    pub async fn search(&self, query: &str) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.search(query).await?)
    }

    /// Validates and stores a new task.
    ///
    /// The task never starts with a completion timestamp, whatever its
    /// initial status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] when the draft is invalid
    /// or [`TaskLifecycleError::Repository`] when the store fails.
    pub async fn create(&self, draft: NewTask) -> TaskLifecycleResult<Task> {
        if let Err(err) = validate_new_task(&draft) {
            tracing::warn!(error = %err, "rejected task draft");
            return Err(err.into());
        }
        let task = self.repository.create(draft, self.clock.utc()).await?;
        tracing::info!(
            task_id = %task.id(),
            project_id = %task.project_id(),
            status = %task.status(),
            "created task"
        );
        Ok(task)
    }

    /// Validates and merges a partial update onto a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] when the patch is invalid
    /// or [`TaskLifecycleError::Repository`] when the store fails.
    pub async fn update(&self, id: TaskId, patch: TaskPatch) -> TaskLifecycleResult<Option<Task>> {
        if let Err(err) = validate_patch(&patch) {
            tracing::warn!(task_id = %id, error = %err, "rejected task patch");
            return Err(err.into());
        }
        let updated = self.repository.update(id, patch, self.clock.utc()).await?;
        match &updated {
            Some(task) => tracing::info!(
                task_id = %id,
                status = %task.status(),
                completed = task.completed_at().is_some(),
                "updated task"
            ),
            None => tracing::debug!(task_id = %id, "update skipped, task not found"),
        }
        Ok(updated)
    }

    /// Moves a task to another status.
    ///
    /// Equivalent to [`Self::update`] with a status-only patch, so the
    /// completion timestamp rule applies identically.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] for a status outside the
    /// board columns or [`TaskLifecycleError::Repository`] when the store
    /// fails.
    pub async fn update_status(
        &self,
        id: TaskId,
        status: impl Into<TaskStatus>,
    ) -> TaskLifecycleResult<Option<Task>> {
        self.update(id, TaskPatch::status_only(status)).await
    }

    /// Removes a task and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the store fails.
    pub async fn delete(&self, id: TaskId) -> TaskLifecycleResult<Option<Task>> {
        let deleted = self.repository.delete(id).await?;
        if deleted.is_some() {
            tracing::info!(task_id = %id, "deleted task");
        }
        Ok(deleted)
    }
}
