//! Shared world state for board lifecycle BDD scenarios.

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::{
    assignee::services::AssigneeDirectoryError,
    board::DropOutcome,
    config::WorkspaceConfig,
    project::domain::Project,
    task::{domain::Task, services::TaskLifecycleError},
    workspace::Workspace,
};

/// Scenario world for board lifecycle behaviour tests.
pub struct BoardWorld {
    pub workspace: Workspace<DefaultClock>,
    pub project: Option<Project>,
    pub task: Option<Task>,
    pub drop_outcome: Option<DropOutcome>,
    pub create_result: Option<Result<Task, TaskLifecycleError>>,
    pub assignee_result: Option<Result<(), AssigneeDirectoryError>>,
}

impl BoardWorld {
    /// Creates a world over an empty, latency-free workspace.
    ///
    /// # Panics
    ///
    /// Panics if the workspace cannot be built.
    #[must_use]
    pub fn new() -> Self {
        let workspace = Workspace::new(WorkspaceConfig::empty_instant())
            .expect("empty workspace should build");
        Self {
            workspace,
            project: None,
            task: None,
            drop_outcome: None,
            create_result: None,
            assignee_result: None,
        }
    }

    /// Returns the scenario's project.
    pub fn project(&self) -> Result<&Project, eyre::Report> {
        self.project
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing project in scenario world"))
    }

    /// Returns the scenario's task.
    pub fn task(&self) -> Result<&Task, eyre::Report> {
        self.task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
