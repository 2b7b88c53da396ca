//! Archive view: archived projects and completed tasks.

use crate::{project::domain::Project, task::domain::Task};

/// Archived projects and completed tasks, each in store order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchiveView {
    /// Projects flagged as archived.
    pub projects: Vec<Project>,
    /// Tasks whose status is `done`, from every project.
    pub completed_tasks: Vec<Task>,
}

impl ArchiveView {
    /// Builds the view from full project and task listings.
    #[must_use]
    pub fn from_records(projects: &[Project], tasks: &[Task]) -> Self {
        Self {
            projects: projects
                .iter()
                .filter(|project| project.is_archived())
                .cloned()
                .collect(),
            completed_tasks: tasks
                .iter()
                .filter(|task| task.status().is_done())
                .cloned()
                .collect(),
        }
    }

    /// Returns `true` when there is nothing archived or completed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty() && self.completed_tasks.is_empty()
    }
}
