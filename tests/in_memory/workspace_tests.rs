//! In-memory integration tests for the seeded workspace and derived views.

use super::helpers::{TestWorkspace, clock, init_tracing, seeded};
use chrono::{NaiveDate, TimeZone, Utc};
use rstest::rstest;
use std::sync::Arc;
use taskboard::{
    assignee::domain::NewAssignee,
    board::{Column, DropOutcome, TimelineWindow},
    clock::ManualClock,
    config::WorkspaceConfig,
    project::domain::ProjectId,
    task::domain::{NewTask, TaskId, TaskStatus},
    workspace::{Workspace, WorkspaceError},
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

#[rstest]
#[tokio::test]
async fn seeded_stats_count_projects_and_tasks(seeded: TestWorkspace) {
    let stats = seeded.stats().await.expect("stats should load");

    assert_eq!(stats.total_projects, 3);
    assert_eq!(stats.active_projects, 2);
    assert_eq!(stats.archived_projects, 1);
    assert_eq!(stats.total_tasks, 8);
    assert_eq!(stats.completed_tasks, 2);
    assert_eq!(stats.pending_tasks, 6);
}

#[rstest]
#[tokio::test]
async fn seeded_archive_lists_archived_projects_and_done_tasks(seeded: TestWorkspace) {
    let archive = seeded.archive().await.expect("archive should load");

    let project_ids: Vec<_> = archive.projects.iter().map(|p| p.id()).collect();
    assert_eq!(project_ids, vec![ProjectId::new(3)]);
    let task_ids: Vec<_> = archive.completed_tasks.iter().map(|t| t.id()).collect();
    assert_eq!(task_ids, vec![TaskId::new(1), TaskId::new(8)]);
}

#[rstest]
#[tokio::test]
async fn seeded_board_groups_project_tasks_by_column(seeded: TestWorkspace) {
    let board = seeded
        .board(ProjectId::new(1), "")
        .await
        .expect("board should load");

    let ids = |column| -> Vec<_> { board.column(column).iter().map(|t| t.id()).collect() };
    assert_eq!(ids(Column::Todo), vec![TaskId::new(3), TaskId::new(4)]);
    assert_eq!(ids(Column::InProgress), vec![TaskId::new(2)]);
    assert_eq!(ids(Column::Done), vec![TaskId::new(1)]);
}

#[rstest]
#[tokio::test]
async fn seeded_board_search_filters_every_column(seeded: TestWorkspace) {
    let board = seeded
        .board(ProjectId::new(1), "ANALYTICS")
        .await
        .expect("board should load");

    assert_eq!(board.len(), 1);
    assert_eq!(board.column(Column::Todo).len(), 1);
    assert!(board.column(Column::Done).is_empty());
}

#[rstest]
#[tokio::test]
async fn seeded_timeline_orders_dated_tasks_and_flags_overdue(seeded: TestWorkspace) {
    let window = TimelineWindow::new(date(2024, 1, 15), date(2024, 2, 14));
    let timeline = seeded
        .timeline(ProjectId::new(1), Some(window))
        .await
        .expect("timeline should load");

    let entries = timeline.entries();
    let ids: Vec<_> = entries.iter().map(|e| e.task.id()).collect();
    assert_eq!(ids, vec![TaskId::new(1), TaskId::new(2), TaskId::new(4)]);

    // The manual clock reads 2024-02-01: task 2 is still in progress on
    // its 2024-02-05 due date, so it is not overdue yet.
    assert!(entries.iter().all(|entry| !entry.overdue));
    assert!(entries.windows(2).all(|pair| pair[0].position <= pair[1].position));
}

#[rstest]
#[tokio::test]
async fn seeded_timeline_defaults_to_window_from_today(seeded: TestWorkspace) {
    let timeline = seeded
        .timeline(ProjectId::new(2), None)
        .await
        .expect("timeline should load");

    assert_eq!(timeline.window().start(), date(2024, 2, 1));
    assert_eq!(timeline.window().end(), date(2024, 3, 2));
    let overdue: Vec<_> = timeline
        .entries()
        .iter()
        .filter(|entry| entry.overdue)
        .map(|entry| entry.task.id())
        .collect();
    assert!(overdue.is_empty());
}

#[rstest]
#[tokio::test]
async fn seeded_active_projects_exclude_archived(seeded: TestWorkspace) {
    let active = seeded.projects().active().await.expect("query should succeed");

    let ids: Vec<_> = active.iter().map(|p| p.id()).collect();
    assert_eq!(ids, vec![ProjectId::new(1), ProjectId::new(2)]);
}

#[rstest]
#[tokio::test]
async fn seeded_ids_continue_after_existing_records(seeded: TestWorkspace) {
    let task = seeded
        .tasks()
        .create(NewTask::new(ProjectId::new(2), "Store listing copy"))
        .await
        .expect("task should be created");
    let assignee = seeded
        .assignees()
        .create(NewAssignee::new("Ola Nordmann", "ola@company.com"))
        .await
        .expect("assignee should be created");

    assert_eq!(task.id(), TaskId::new(9));
    assert_eq!(assignee.id().to_string(), "6");
}

#[rstest]
#[tokio::test]
async fn seeded_duplicate_email_is_rejected(seeded: TestWorkspace) {
    let error = seeded
        .assignees()
        .create(NewAssignee::new("Another John", "John.Doe@Company.com"))
        .await
        .expect_err("duplicate email should be rejected");

    assert!(error.is_duplicate_email());
    assert_eq!(
        seeded.assignees().all().await.expect("list should load").len(),
        5
    );
}

#[rstest]
#[tokio::test]
async fn board_drop_moves_task_and_stamps_completion(seeded: TestWorkspace) {
    let mut cache = seeded
        .board_cache(ProjectId::new(2))
        .await
        .expect("cache should load");

    let outcome = cache
        .apply_drop(seeded.tasks(), TaskId::new(5), Column::Done)
        .await
        .expect("drop should succeed");

    let DropOutcome::Moved(task) = outcome else {
        panic!("expected the task to move");
    };
    assert_eq!(task.status(), &TaskStatus::Done);
    assert!(task.completed_at().is_some());
    assert_eq!(cache.get(TaskId::new(5)), Some(&task));
}

#[tokio::test]
async fn cloned_workspace_handles_share_collections() {
    init_tracing();
    let workspace =
        Workspace::new(WorkspaceConfig::seeded_instant()).expect("workspace should build");
    let other = workspace.clone();

    let created = workspace
        .tasks()
        .create(NewTask::new(ProjectId::new(1), "Visible everywhere"))
        .await
        .expect("task should be created");

    let seen = other
        .tasks()
        .find_by_id(created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(seen, Some(created));
}

#[rstest]
#[tokio::test]
async fn timeline_flags_open_tasks_once_their_due_date_passes(clock: Arc<ManualClock>) {
    init_tracing();
    let workspace = Workspace::with_clock(WorkspaceConfig::seeded_instant(), Arc::clone(&clock))
        .expect("seeded workspace should build");
    clock.set(
        Utc.with_ymd_and_hms(2024, 2, 10, 12, 0, 0)
            .single()
            .expect("valid instant"),
    );

    let timeline = workspace
        .timeline(ProjectId::new(2), None)
        .await
        .expect("timeline should load");

    assert_eq!(timeline.window().start(), date(2024, 2, 10));
    let overdue: Vec<_> = timeline
        .entries()
        .iter()
        .filter(|entry| entry.overdue)
        .map(|entry| entry.task.id())
        .collect();
    assert_eq!(overdue, vec![TaskId::new(5)]);
}

#[rstest]
#[tokio::test]
async fn create_task_rejects_missing_project(seeded: TestWorkspace) {
    let error = seeded
        .create_task(NewTask::new(ProjectId::new(7), "Nowhere to live"))
        .await
        .expect_err("unknown project should be rejected");

    assert!(matches!(error, WorkspaceError::UnknownProject(id) if id == ProjectId::new(7)));
    let stored = seeded
        .tasks()
        .find_by_project(ProjectId::new(7))
        .await
        .expect("query should succeed");
    assert!(stored.is_empty());
}

#[rstest]
#[tokio::test]
async fn create_task_accepts_existing_project(seeded: TestWorkspace) {
    let task = seeded
        .create_task(NewTask::new(ProjectId::new(2), "Release notes"))
        .await
        .expect("task should be created");

    assert_eq!(task.project_id(), ProjectId::new(2));
    assert_eq!(task.id(), TaskId::new(9));
}
