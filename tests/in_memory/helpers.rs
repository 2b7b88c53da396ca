//! Shared test helpers for in-memory store integration tests.

use chrono::{DateTime, TimeZone, Utc};
use rstest::fixture;
use std::sync::Arc;
use taskboard::{clock::ManualClock, config::WorkspaceConfig, workspace::Workspace};

/// Workspace type used across the integration tests.
pub type TestWorkspace = Workspace<ManualClock>;

/// Fixed start time for every test clock.
pub fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 2, 1, 9, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Installs a test subscriber so `RUST_LOG` output shows up on failure.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

/// Provides a shared manual clock.
#[fixture]
pub fn clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(start()))
}

/// Provides an empty workspace without latency.
#[fixture]
pub fn empty(clock: Arc<ManualClock>) -> (TestWorkspace, Arc<ManualClock>) {
    init_tracing();
    let workspace = Workspace::with_clock(WorkspaceConfig::empty_instant(), Arc::clone(&clock))
        .expect("empty workspace should build");
    (workspace, clock)
}

/// Provides a workspace loaded from the bundled seed without latency.
#[fixture]
pub fn seeded(clock: Arc<ManualClock>) -> TestWorkspace {
    init_tracing();
    Workspace::with_clock(WorkspaceConfig::seeded_instant(), clock)
        .expect("seeded workspace should build")
}
