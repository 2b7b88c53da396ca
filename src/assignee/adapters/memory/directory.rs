//! In-memory assignee repository with simulated latency.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, RwLock};

use crate::{
    assignee::{
        domain::{Assignee, AssigneeId, AssigneePatch, ValidatedAssignee},
        ports::{AssigneeRepository, AssigneeRepositoryError, AssigneeRepositoryResult},
    },
    store::{Collection, OperationLatency, latency},
};

/// Thread-safe in-memory assignee repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssigneeRepository {
    state: Arc<RwLock<Collection<Assignee>>>,
    latency: OperationLatency,
}

impl InMemoryAssigneeRepository {
    /// Creates an empty repository without latency.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding `assignees` in the given order.
    #[must_use]
    pub fn with_assignees(assignees: Vec<Assignee>) -> Self {
        Self {
            state: Arc::new(RwLock::new(Collection::from_records(assignees))),
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

fn poisoned(err: impl std::fmt::Display) -> AssigneeRepositoryError {
    AssigneeRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl AssigneeRepository for InMemoryAssigneeRepository {
    async fn all(&self) -> AssigneeRepositoryResult<Vec<Assignee>> {
        latency::pause(self.latency.list).await;
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.all())
    }

    async fn find_by_id(&self, id: AssigneeId) -> AssigneeRepositoryResult<Option<Assignee>> {
        latency::pause(self.latency.get).await;
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.get(id))
    }

    async fn create(
        &self,
        input: ValidatedAssignee,
        now: DateTime<Utc>,
    ) -> AssigneeRepositoryResult<Assignee> {
        latency::pause(self.latency.create).await;
        let mut state = self.state.write().map_err(poisoned)?;
        if state.any(|existing| existing.has_email(input.email())) {
            return Err(AssigneeRepositoryError::DuplicateEmail(
                input.email().to_owned(),
            ));
        }
        let assignee = Assignee::create(state.next_id(), input, now);
        Ok(state.push(assignee))
    }

    async fn update(
        &self,
        id: AssigneeId,
        patch: AssigneePatch,
    ) -> AssigneeRepositoryResult<Option<Assignee>> {
        latency::pause(self.latency.update).await;
        let mut state = self.state.write().map_err(poisoned)?;
        Ok(state.update_with(id, |assignee| assignee.apply(patch)))
    }

    async fn delete(&self, id: AssigneeId) -> AssigneeRepositoryResult<Option<Assignee>> {
        latency::pause(self.latency.delete).await;
        let mut state = self.state.write().map_err(poisoned)?;
        Ok(state.remove(id))
    }
}
