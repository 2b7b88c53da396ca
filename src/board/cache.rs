//! Caller-side board cache reconciled against authoritative records.
//!
//! A board view keeps its own copy of a project's tasks. Every mutating
//! store call returns the post-mutation record, and the cache replaces its
//! entry with that record wholesale instead of merging local edits.

use super::{Board, Column};
use crate::{
    project::domain::ProjectId,
    task::{
        domain::{Task, TaskId},
        ports::TaskRepository,
        services::{TaskLifecycleResult, TaskLifecycleService},
    },
};
use mockable::Clock;

/// What happened when a task was dropped onto a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The task already sat in the target column, or is not cached.
    Unchanged,
    /// The store no longer holds the task; the cache was left as is.
    Missing,
    /// The task moved; holds the authoritative record.
    Moved(Task),
}

/// Local copy of one project's tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardCache {
    project_id: ProjectId,
    tasks: Vec<Task>,
}

impl BoardCache {
    /// Creates a cache from freshly fetched project tasks.
    #[must_use]
    pub const fn new(project_id: ProjectId, tasks: Vec<Task>) -> Self {
        Self { project_id, tasks }
    }

    /// Fetches the project's tasks and caches them.
    ///
    /// # Errors
    ///
    /// Propagates the lifecycle service failure.
    pub async fn load<R, C>(
        service: &TaskLifecycleService<R, C>,
        project_id: ProjectId,
    ) -> TaskLifecycleResult<Self>
    where
        R: TaskRepository,
        C: Clock + Send + Sync,
    {
        let tasks = service.find_by_project(project_id).await?;
        Ok(Self::new(project_id, tasks))
    }

    /// Returns the cached project identifier.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the cached tasks in store order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the cached copy of a task.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Projects the cached tasks into board columns.
    #[must_use]
    pub fn board(&self, query: &str) -> Board {
        Board::project(&self.tasks, query)
    }

    /// Replaces the cached entry with the authoritative record.
    ///
    /// A record that now belongs to another project is evicted, and a
    /// record for this project that was not cached yet is appended.
    pub fn reconcile(&mut self, task: Task) {
        let position = self.tasks.iter().position(|cached| cached.id() == task.id());
        match position {
            Some(index) if task.project_id() != self.project_id => {
                self.tasks.remove(index);
            }
            Some(index) => {
                if let Some(slot) = self.tasks.get_mut(index) {
                    *slot = task;
                }
            }
            None if task.project_id() == self.project_id => self.tasks.push(task),
            None => {}
        }
    }

    /// Drops a task from the cache.
    pub fn evict(&mut self, id: TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id() == id)?;
        Some(self.tasks.remove(index))
    }

    /// Handles a task dropped onto `column`.
    ///
    /// Dropping onto the column the task already occupies is a no-op and
    /// does not touch the store. Otherwise the status is updated and the
    /// returned record replaces the cached one.
    ///
    /// # Errors
    ///
    /// Propagates the lifecycle service failure; the cache is unchanged.
    pub async fn apply_drop<R, C>(
        &mut self,
        service: &TaskLifecycleService<R, C>,
        id: TaskId,
        column: Column,
    ) -> TaskLifecycleResult<DropOutcome>
    where
        R: TaskRepository,
        C: Clock + Send + Sync,
    {
        let Some(cached) = self.get(id) else {
            return Ok(DropOutcome::Unchanged);
        };
        if Column::for_status(cached.status()) == Some(column) {
            return Ok(DropOutcome::Unchanged);
        }

        match service.update_status(id, column.status()).await? {
            Some(task) => {
                tracing::debug!(task_id = %id, column = column.id(), "task moved");
                self.reconcile(task.clone());
                Ok(DropOutcome::Moved(task))
            }
            None => Ok(DropOutcome::Missing),
        }
    }
}
