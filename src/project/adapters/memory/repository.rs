//! In-memory project repository with simulated latency.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, RwLock};

use crate::{
    project::{
        domain::{NewProject, Project, ProjectId, ProjectPatch},
        ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
    },
    store::{Collection, OperationLatency, latency},
};

/// Thread-safe in-memory project repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    state: Arc<RwLock<Collection<Project>>>,
    latency: OperationLatency,
}

impl InMemoryProjectRepository {
    /// Creates an empty repository without latency.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding `projects` in the given order.
    #[must_use]
    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self {
            state: Arc::new(RwLock::new(Collection::from_records(projects))),
            latency: OperationLatency::none(),
        }
    }

    /// Sets the simulated latency.
    #[must_use]
    pub const fn with_latency(mut self, latency: OperationLatency) -> Self {
        self.latency = latency;
        self
    }
}

fn poisoned(err: impl std::fmt::Display) -> ProjectRepositoryError {
    ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn all(&self) -> ProjectRepositoryResult<Vec<Project>> {
        latency::pause(self.latency.list).await;
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.all())
    }

    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        latency::pause(self.latency.get).await;
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.get(id))
    }

    async fn create(
        &self,
        draft: NewProject,
        now: DateTime<Utc>,
    ) -> ProjectRepositoryResult<Project> {
        latency::pause(self.latency.create).await;
        let mut state = self.state.write().map_err(poisoned)?;
        let project = Project::create(state.next_id(), draft, now);
        Ok(state.push(project))
    }

    async fn update(
        &self,
        id: ProjectId,
        patch: ProjectPatch,
    ) -> ProjectRepositoryResult<Option<Project>> {
        latency::pause(self.latency.update).await;
        let mut state = self.state.write().map_err(poisoned)?;
        Ok(state.update_with(id, |project| project.apply(patch)))
    }

    async fn delete(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        latency::pause(self.latency.delete).await;
        let mut state = self.state.write().map_err(poisoned)?;
        Ok(state.remove(id))
    }
}
