//! In-memory integration tests for task lifecycle operations.

use super::helpers::{TestWorkspace, empty, start};
use chrono::Duration;
use rstest::rstest;
use std::sync::Arc;
use taskboard::{
    assignee::domain::AssigneeId,
    clock::ManualClock,
    project::domain::{NewProject, ProjectId},
    task::domain::{NewTask, TaskId, TaskPatch, TaskPriority, TaskStatus},
};

#[rstest]
#[tokio::test]
async fn fix_bug_round_trip_through_done(empty: (TestWorkspace, Arc<ManualClock>)) {
    let (workspace, clock) = empty;
    let tasks = workspace.tasks();

    let created = tasks
        .create(
            NewTask::new(ProjectId::new(7), "Fix bug")
                .with_status(TaskStatus::Todo)
                .with_priority(TaskPriority::High),
        )
        .await
        .expect("task should be created");

    let listed = tasks
        .find_by_project(ProjectId::new(7))
        .await
        .expect("query should succeed");
    assert_eq!(listed, vec![created.clone()]);
    assert_eq!(created.completed_at(), None);

    clock.advance(Duration::hours(2));
    let done = tasks
        .update_status(created.id(), TaskStatus::Done)
        .await
        .expect("update should succeed")
        .expect("task should exist");
    let stamp = done.completed_at().expect("done task should be stamped");
    assert!(stamp >= start() + Duration::hours(2));

    let reopened = tasks
        .update_status(created.id(), TaskStatus::InProgress)
        .await
        .expect("update should succeed")
        .expect("task should exist");
    assert_eq!(reopened.completed_at(), None);
}

#[rstest]
#[tokio::test]
async fn completion_invariant_holds_after_every_update(empty: (TestWorkspace, Arc<ManualClock>)) {
    let (workspace, clock) = empty;
    let tasks = workspace.tasks();
    let created = tasks
        .create(NewTask::new(ProjectId::new(1), "Cycle"))
        .await
        .expect("task should be created");

    let patches = [
        TaskPatch::status_only(TaskStatus::InProgress),
        TaskPatch::status_only(TaskStatus::Done),
        TaskPatch::new().with_title("Cycle again"),
        TaskPatch::status_only(TaskStatus::Done),
        TaskPatch::new().with_priority(TaskPriority::Low),
        TaskPatch::status_only(TaskStatus::Todo),
        TaskPatch::new().clear_due_date(),
    ];
    for patch in patches {
        clock.advance(Duration::minutes(1));
        let updated = tasks
            .update(created.id(), patch)
            .await
            .expect("update should succeed")
            .expect("task should exist");
        assert_eq!(updated.status().is_done(), updated.completed_at().is_some());
    }
}

#[rstest]
#[tokio::test]
async fn omitted_status_never_changes_completion(empty: (TestWorkspace, Arc<ManualClock>)) {
    let (workspace, clock) = empty;
    let tasks = workspace.tasks();
    let created = tasks
        .create(NewTask::new(ProjectId::new(1), "Stable"))
        .await
        .expect("task should be created");
    let done = tasks
        .update_status(created.id(), TaskStatus::Done)
        .await
        .expect("update should succeed")
        .expect("task should exist");

    clock.advance(Duration::days(1));
    let edited = tasks
        .update(
            created.id(),
            TaskPatch::new().with_description("Edited after completion"),
        )
        .await
        .expect("update should succeed")
        .expect("task should exist");

    assert_eq!(edited.completed_at(), done.completed_at());
}

#[rstest]
#[tokio::test]
async fn assignee_is_kept_unless_explicitly_cleared(empty: (TestWorkspace, Arc<ManualClock>)) {
    let (workspace, _clock) = empty;
    let tasks = workspace.tasks();
    let created = tasks
        .create(NewTask::new(ProjectId::new(1), "Owned").with_assignee(AssigneeId::new(3)))
        .await
        .expect("task should be created");

    let renamed = tasks
        .update(created.id(), TaskPatch::new().with_title("Still owned"))
        .await
        .expect("update should succeed")
        .expect("task should exist");
    assert_eq!(renamed.assignee(), Some(AssigneeId::new(3)));

    let cleared = tasks
        .update(created.id(), TaskPatch::new().clear_assignee())
        .await
        .expect("update should succeed")
        .expect("task should exist");
    assert_eq!(cleared.assignee(), None);
}

#[rstest]
#[tokio::test]
async fn unknown_id_is_not_found_on_empty_store(empty: (TestWorkspace, Arc<ManualClock>)) {
    let (workspace, _clock) = empty;
    let found = workspace
        .tasks()
        .find_by_id(TaskId::new(9999))
        .await
        .expect("lookup should not fail");
    assert!(found.is_none());
}

#[rstest]
#[tokio::test]
async fn deleting_a_project_leaves_its_tasks_queryable(empty: (TestWorkspace, Arc<ManualClock>)) {
    let (workspace, _clock) = empty;
    let project = workspace
        .projects()
        .create(NewProject::new("Short lived"))
        .await
        .expect("project should be created");
    workspace
        .tasks()
        .create(NewTask::new(project.id(), "Orphan to be"))
        .await
        .expect("task should be created");

    workspace
        .projects()
        .delete(project.id())
        .await
        .expect("delete should succeed");

    let orphans = workspace
        .tasks()
        .find_by_project(project.id())
        .await
        .expect("query should succeed");
    assert_eq!(orphans.len(), 1);
    assert!(workspace
        .projects()
        .find_by_id(project.id())
        .await
        .expect("lookup should succeed")
        .is_none());
}
