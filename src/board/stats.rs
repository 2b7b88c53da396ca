//! Workspace-wide counters for the settings panel.

use crate::{project::domain::Project, task::domain::Task};
use serde::Serialize;

/// Project and task counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceStats {
    /// Every project.
    pub total_projects: usize,
    /// Projects not archived.
    pub active_projects: usize,
    /// Archived projects.
    pub archived_projects: usize,
    /// Every task.
    pub total_tasks: usize,
    /// Tasks with status `done`.
    pub completed_tasks: usize,
    /// Tasks with any other status, unrecognized ones included.
    pub pending_tasks: usize,
}

impl WorkspaceStats {
    /// Counts projects and tasks.
    #[must_use]
    pub fn from_records(projects: &[Project], tasks: &[Task]) -> Self {
        let archived_projects = projects.iter().filter(|p| p.is_archived()).count();
        let completed_tasks = tasks.iter().filter(|t| t.status().is_done()).count();
        Self {
            total_projects: projects.len(),
            active_projects: projects.len() - archived_projects,
            archived_projects,
            total_tasks: tasks.len(),
            completed_tasks,
            pending_tasks: tasks.len() - completed_tasks,
        }
    }
}
