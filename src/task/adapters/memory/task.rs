//! In-memory task repository with simulated latency.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{
    project::domain::ProjectId,
    store::{Collection, OperationLatency, latency},
    task::{
        domain::{NewTask, Task, TaskId, TaskPatch},
        ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
    },
};

/// Thread-safe in-memory task repository.
///
/// Clones share the same collection, so every holder observes mutations
/// made through any other clone on its next read.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<Collection<Task>>>,
    latency: OperationLatency,
}

impl InMemoryTaskRepository {
    /// Creates an empty repository without latency.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding `tasks` in the given order.
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            state: Arc::new(RwLock::new(Collection::from_records(tasks))),
            latency: OperationLatency::none(),
        }
    }

    /// Sets the simulated latency.
    #[must_use]
    pub const fn with_latency(mut self, latency: OperationLatency) -> Self {
        self.latency = latency;
        self
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, Collection<Task>>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, Collection<Task>>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn all(&self) -> TaskRepositoryResult<Vec<Task>> {
        latency::pause(self.latency.list).await;
        Ok(self.read()?.all())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        latency::pause(self.latency.get).await;
        Ok(self.read()?.get(id))
    }

    async fn find_by_project(&self, project_id: ProjectId) -> TaskRepositoryResult<Vec<Task>> {
        latency::pause(self.latency.query).await;
        Ok(self
            .read()?
            .filter(|task| task.project_id() == project_id))
    }

    async fn search(&self, query: &str) -> TaskRepositoryResult<Vec<Task>> {
        latency::pause(self.latency.query).await;
        Ok(self.read()?.filter(|task| task.matches_query(query)))
    }

    async fn create(&self, draft: NewTask, now: DateTime<Utc>) -> TaskRepositoryResult<Task> {
        latency::pause(self.latency.create).await;
        let mut state = self.write()?;
        let task = Task::create(state.next_id(), draft, now);
        Ok(state.push(task))
    }

    async fn update(
        &self,
        id: TaskId,
        patch: TaskPatch,
        now: DateTime<Utc>,
    ) -> TaskRepositoryResult<Option<Task>> {
        latency::pause(self.latency.update).await;
        Ok(self.write()?.update_with(id, |task| task.apply(patch, now)))
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        latency::pause(self.latency.delete).await;
        Ok(self.write()?.remove(id))
    }
}
