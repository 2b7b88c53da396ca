//! Task aggregate and the payloads used to create and patch it.

use super::{TaskId, TaskPriority, TaskStatus};
use crate::{assignee::domain::AssigneeId, project::domain::ProjectId, store::Record};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};

/// Task aggregate root.
///
/// `completed_at` is set exactly when `status` is [`TaskStatus::Done`] for
/// every task that has been created or patched through [`Task::create`] and
/// [`Task::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    project_id: ProjectId,
    title: String,
    #[serde(default)]
    description: String,
    status: TaskStatus,
    #[serde(default)]
    priority: TaskPriority,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    due_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "crate::store::deserialize_optional_key")]
    assignee: Option<AssigneeId>,
    created_at: DateTime<Utc>,
    #[serde(default)]
    completed_at: Option<DateTime<Utc>>,
}

/// Reads an ISO `YYYY-MM-DD` date, treating `null` and `""` as no date.
fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw.trim().parse().map(Some).map_err(D::Error::custom),
    }
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Owning project.
    pub project_id: ProjectId,
    /// Task title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Workflow status, possibly outside the known set.
    pub status: TaskStatus,
    /// Priority.
    pub priority: TaskPriority,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Optional assignee.
    pub assignee: Option<AssigneeId>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Completion timestamp.
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a task from a draft.
    ///
    /// The completion timestamp always starts empty, even when the draft
    /// status is [`TaskStatus::Done`]; it is only stamped by a later
    /// transition through [`Task::apply`].
    #[must_use]
    pub fn create(id: TaskId, draft: NewTask, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            project_id: draft.project_id,
            title: draft.title,
            description: draft.description,
            status: draft.status.unwrap_or_default(),
            priority: draft.priority,
            due_date: draft.due_date,
            assignee: draft.assignee,
            created_at,
            completed_at: None,
        }
    }

    /// Reconstructs a task from persisted storage without re-validating it.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            project_id: data.project_id,
            title: data.title,
            description: data.description,
            status: data.status,
            priority: data.priority,
            due_date: data.due_date,
            assignee: data.assignee,
            created_at: data.created_at,
            completed_at: data.completed_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning project identifier.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> &TaskStatus {
        &self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the assignee, or `None` when unassigned.
    #[must_use]
    pub const fn assignee(&self) -> Option<AssigneeId> {
        self.assignee
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the completion timestamp, if the task is done.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns `true` when the title or description contains `query`,
    /// ignoring case. An empty query matches every task.
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }

    /// Returns `true` when the due date has passed and the task is not done.
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_date.is_some_and(|due| due < today) && !self.status.is_done()
    }

    /// Merges `patch` onto the task.
    ///
    /// Only the fields present in the patch change. When the patch carries a
    /// status, the completion timestamp follows it: moving into `done` from
    /// any other status stamps `now`, moving to any other status clears it,
    /// and re-applying `done` keeps the original stamp.
    pub fn apply(&mut self, patch: TaskPatch, now: DateTime<Utc>) {
        let TaskPatch {
            project_id,
            title,
            description,
            status,
            priority,
            due_date,
            assignee,
        } = patch;

        if let Some(project_id) = project_id {
            self.project_id = project_id;
        }
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(priority) = priority {
            self.priority = priority;
        }
        if let Some(due_date) = due_date {
            self.due_date = due_date;
        }
        if let Some(assignee) = assignee {
            self.assignee = assignee;
        }
        if let Some(next) = status {
            self.transition(next, now);
        }
    }

    fn transition(&mut self, next: TaskStatus, now: DateTime<Utc>) {
        self.completed_at = match (self.status.is_done(), next.is_done()) {
            (false, true) => Some(now),
            (true, true) => self.completed_at.or(Some(now)),
            (_, false) => None,
        };
        self.status = next;
    }
}

impl Record for Task {
    type Id = TaskId;

    fn id(&self) -> TaskId {
        self.id
    }
}

/// Draft for a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    project_id: ProjectId,
    title: String,
    description: String,
    status: Option<TaskStatus>,
    priority: TaskPriority,
    due_date: Option<NaiveDate>,
    assignee: Option<AssigneeId>,
}

impl NewTask {
    /// Creates a draft with the required fields.
    ///
    /// The status defaults to `todo` and the priority to `medium`.
    #[must_use]
    pub fn new(project_id: ProjectId, title: impl Into<String>) -> Self {
        Self {
            project_id,
            title: title.into(),
            description: String::new(),
            status: None,
            priority: TaskPriority::default(),
            due_date: None,
            assignee: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the initial status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<TaskStatus>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub const fn with_assignee(mut self, assignee: AssigneeId) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the explicitly requested status, if any.
    #[must_use]
    pub const fn status(&self) -> Option<&TaskStatus> {
        self.status.as_ref()
    }
}

/// Partial update for a task.
///
/// Absent fields keep their stored value. The due date and assignee are
/// tri-state: absent, cleared, or set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    project_id: Option<ProjectId>,
    title: Option<String>,
    description: Option<String>,
    status: Option<TaskStatus>,
    priority: Option<TaskPriority>,
    due_date: Option<Option<NaiveDate>>,
    assignee: Option<Option<AssigneeId>>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Patch that only changes the status.
    #[must_use]
    pub fn status_only(status: impl Into<TaskStatus>) -> Self {
        Self::new().with_status(status)
    }

    /// Moves the task to another project.
    #[must_use]
    pub const fn with_project(mut self, project_id: ProjectId) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<TaskStatus>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Replaces the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(Some(due_date));
        self
    }

    /// Removes the due date.
    #[must_use]
    pub const fn clear_due_date(mut self) -> Self {
        self.due_date = Some(None);
        self
    }

    /// Assigns the task.
    #[must_use]
    pub const fn with_assignee(mut self, assignee: AssigneeId) -> Self {
        self.assignee = Some(Some(assignee));
        self
    }

    /// Unassigns the task.
    #[must_use]
    pub const fn clear_assignee(mut self) -> Self {
        self.assignee = Some(None);
        self
    }

    /// Returns the title to apply, if present.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the status to apply, if present.
    #[must_use]
    pub const fn status(&self) -> Option<&TaskStatus> {
        self.status.as_ref()
    }
}
