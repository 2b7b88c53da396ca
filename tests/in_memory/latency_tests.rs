//! Simulated latency and interleaving of store operations.

use super::helpers::{clock, init_tracing};
use rstest::rstest;
use std::{collections::HashSet, sync::Arc};
use taskboard::{
    clock::ManualClock,
    config::{LatencyConfig, WorkspaceConfig},
    project::domain::ProjectId,
    task::domain::NewTask,
    workspace::Workspace,
};
use tokio::time::{Duration, Instant};

fn assert_elapsed(started: Instant, expected_ms: u64) {
    let elapsed = started.elapsed();
    assert!(
        elapsed >= Duration::from_millis(expected_ms)
            && elapsed < Duration::from_millis(expected_ms + 50),
        "expected about {expected_ms}ms, took {elapsed:?}"
    );
}

fn delayed_workspace(clock: Arc<ManualClock>) -> Workspace<ManualClock> {
    init_tracing();
    let config = WorkspaceConfig {
        latency: LatencyConfig::default(),
        seed: true,
    };
    Workspace::with_clock(config, clock).expect("workspace should build")
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn operations_resolve_after_their_configured_delay(clock: Arc<ManualClock>) {
    let workspace = delayed_workspace(clock);

    let started = Instant::now();
    workspace.projects().all().await.expect("list should load");
    assert_elapsed(started, 300);

    let started = Instant::now();
    workspace
        .tasks()
        .create(NewTask::new(ProjectId::new(1), "Slow"))
        .await
        .expect("task should be created");
    assert_elapsed(started, 400);
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn independent_operations_interleave(clock: Arc<ManualClock>) {
    let workspace = delayed_workspace(clock);

    let started = Instant::now();
    let (created, projects) = tokio::join!(
        workspace
            .tasks()
            .create(NewTask::new(ProjectId::new(1), "Concurrent")),
        workspace.projects().all(),
    );

    created.expect("task should be created");
    assert_eq!(projects.expect("list should load").len(), 3);
    assert_elapsed(started, 400);
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn concurrent_creates_receive_distinct_ids(clock: Arc<ManualClock>) {
    let workspace = delayed_workspace(clock);
    let tasks = workspace.tasks();

    let (a, b, c) = tokio::join!(
        tasks.create(NewTask::new(ProjectId::new(1), "First")),
        tasks.create(NewTask::new(ProjectId::new(1), "Second")),
        tasks.create(NewTask::new(ProjectId::new(1), "Third")),
    );

    let ids: HashSet<_> = [a, b, c]
        .into_iter()
        .map(|result| result.expect("task should be created").id())
        .collect();
    assert_eq!(ids.len(), 3);
}
