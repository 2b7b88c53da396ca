//! Composition root wiring the stores and services together.
//!
//! A [`Workspace`] is built once and handed to every consumer. Its services
//! share the same underlying collections, so a mutation made through one
//! handle is visible to every other handle on its next read. Nothing is
//! pushed to consumers; they re-fetch to observe changes.

use crate::{
    assignee::{adapters::memory::InMemoryAssigneeRepository, services::AssigneeDirectoryService},
    assignee::services::AssigneeDirectoryError,
    board::{ArchiveView, Board, BoardCache, Timeline, TimelineWindow, WorkspaceStats},
    config::{LatencyConfig, WorkspaceConfig},
    project::{
        adapters::memory::InMemoryProjectRepository,
        domain::ProjectId,
        services::{ProjectCatalogError, ProjectCatalogService},
    },
    seed::{SeedData, SeedError},
    task::{
        adapters::memory::InMemoryTaskRepository,
        domain::{NewTask, Task},
        services::{TaskLifecycleError, TaskLifecycleService},
    },
};
use mockable::{Clock, DefaultClock};
use std::sync::Arc;
use thiserror::Error;

/// Task service backed by the in-memory store.
pub type TaskService<C> = TaskLifecycleService<InMemoryTaskRepository, C>;

/// Project service backed by the in-memory store.
pub type ProjectService<C> = ProjectCatalogService<InMemoryProjectRepository, C>;

/// Assignee service backed by the in-memory store.
pub type AssigneeService<C> = AssigneeDirectoryService<InMemoryAssigneeRepository, C>;

/// Errors surfaced by workspace-level operations.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    /// Seed data could not be loaded.
    #[error(transparent)]
    Seed(#[from] SeedError),
    /// A task operation failed.
    #[error(transparent)]
    Task(#[from] TaskLifecycleError),
    /// A project operation failed.
    #[error(transparent)]
    Project(#[from] ProjectCatalogError),
    /// An assignee operation failed.
    #[error(transparent)]
    Assignee(#[from] AssigneeDirectoryError),
    /// A task referenced a project that does not exist.
    #[error("project {0} does not exist")]
    UnknownProject(ProjectId),
}

/// Result type for workspace operations.
pub type WorkspaceResult<T> = Result<T, WorkspaceError>;

/// The process-wide set of stores and the services over them.
pub struct Workspace<C>
where
    C: Clock + Send + Sync,
{
    projects: ProjectService<C>,
    tasks: TaskService<C>,
    assignees: AssigneeService<C>,
    clock: Arc<C>,
}

impl<C> Clone for Workspace<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            projects: self.projects.clone(),
            tasks: self.tasks.clone(),
            assignees: self.assignees.clone(),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl Workspace<DefaultClock> {
    /// Builds a workspace on the system clock.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::Seed`] when seeding is enabled and the
    /// bundled fixture cannot be parsed.
    pub fn new(config: WorkspaceConfig) -> WorkspaceResult<Self> {
        Self::with_clock(config, Arc::new(DefaultClock))
    }
}

impl<C> Workspace<C>
where
    C: Clock + Send + Sync,
{
    /// Builds a workspace on the given clock.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::Seed`] when seeding is enabled and the
    /// bundled fixture cannot be parsed.
    pub fn with_clock(config: WorkspaceConfig, clock: Arc<C>) -> WorkspaceResult<Self> {
        let seed = if config.seed {
            SeedData::bundled()?
        } else {
            SeedData::default()
        };
        Ok(Self::from_seed(seed, config.latency, clock))
    }

    /// Builds a workspace whose stores start from `seed`.
    #[must_use]
    pub fn from_seed(seed: SeedData, latency: LatencyConfig, clock: Arc<C>) -> Self {
        let SeedData {
            projects,
            tasks,
            assignees,
        } = seed;
        tracing::info!(
            projects = projects.len(),
            tasks = tasks.len(),
            assignees = assignees.len(),
            "seeding workspace"
        );

        let project_repository =
            InMemoryProjectRepository::with_projects(projects).with_latency(latency.projects);
        let task_repository =
            InMemoryTaskRepository::with_tasks(tasks).with_latency(latency.tasks);
        let assignee_repository =
            InMemoryAssigneeRepository::with_assignees(assignees).with_latency(latency.assignees);

        Self {
            projects: ProjectCatalogService::new(Arc::new(project_repository), Arc::clone(&clock)),
            tasks: TaskLifecycleService::new(Arc::new(task_repository), Arc::clone(&clock)),
            assignees: AssigneeDirectoryService::new(
                Arc::new(assignee_repository),
                Arc::clone(&clock),
            ),
            clock,
        }
    }

    /// Returns the project service.
    #[must_use]
    pub const fn projects(&self) -> &ProjectService<C> {
        &self.projects
    }

    /// Returns the task service.
    #[must_use]
    pub const fn tasks(&self) -> &TaskService<C> {
        &self.tasks
    }

    /// Returns the assignee service.
    #[must_use]
    pub const fn assignees(&self) -> &AssigneeService<C> {
        &self.assignees
    }

    /// Creates a task after checking that its project exists.
    ///
    /// The task service alone trusts the project reference; this is the
    /// entry point for callers that do not.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::UnknownProject`] when the project is
    /// missing, or the underlying service failure.
    pub async fn create_task(&self, draft: NewTask) -> WorkspaceResult<Task> {
        let project_id = draft.project_id();
        if self.projects.find_by_id(project_id).await?.is_none() {
            tracing::warn!(project_id = %project_id, "rejected task for unknown project");
            return Err(WorkspaceError::UnknownProject(project_id));
        }
        Ok(self.tasks.create(draft).await?)
    }

    /// Fetches a project's tasks and projects them into board columns.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::Task`] when the task store fails.
    pub async fn board(&self, project_id: ProjectId, query: &str) -> WorkspaceResult<Board> {
        let tasks = self.tasks.find_by_project(project_id).await?;
        Ok(Board::project(&tasks, query))
    }

    /// Fetches a project's tasks into a cache for a board view.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::Task`] when the task store fails.
    pub async fn board_cache(&self, project_id: ProjectId) -> WorkspaceResult<BoardCache> {
        Ok(BoardCache::load(&self.tasks, project_id).await?)
    }

    /// Loads archived projects and completed tasks.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError`] when either store fails.
    pub async fn archive(&self) -> WorkspaceResult<ArchiveView> {
        let (projects, tasks) = tokio::join!(self.projects.all(), self.tasks.all());
        Ok(ArchiveView::from_records(&projects?, &tasks?))
    }

    /// Computes the project and task counters.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError`] when either store fails.
    pub async fn stats(&self) -> WorkspaceResult<WorkspaceStats> {
        let (projects, tasks) = tokio::join!(self.projects.all(), self.tasks.all());
        Ok(WorkspaceStats::from_records(&projects?, &tasks?))
    }

    /// Lays a project's dated tasks out over `window`, or over the default
    /// 30-day window starting today when `window` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::Task`] when the task store fails.
    pub async fn timeline(
        &self,
        project_id: ProjectId,
        window: Option<TimelineWindow>,
    ) -> WorkspaceResult<Timeline> {
        let today = self.clock.utc().date_naive();
        let window = window.unwrap_or_else(|| TimelineWindow::starting(today));
        let tasks = self.tasks.find_by_project(project_id).await?;
        Ok(Timeline::build(&tasks, window, today))
    }
}
