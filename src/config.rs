//! Runtime configuration for the workspace and its stores.
//!
//! Nothing is read from the environment or from files; configuration is a
//! plain value chosen by whoever constructs the [`crate::workspace::Workspace`].

use crate::store::OperationLatency;

/// Simulated latency for each entity store.
///
/// # Examples
///
/// ```
/// use taskboard::config::LatencyConfig;
///
/// let config = LatencyConfig::default();
/// assert_eq!(config.tasks.create.as_millis(), 400);
///
/// let instant = LatencyConfig::instant();
/// assert!(instant.tasks.create.is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyConfig {
    /// Delays applied by the project store.
    pub projects: OperationLatency,
    /// Delays applied by the task store.
    pub tasks: OperationLatency,
    /// Delays applied by the assignee store.
    pub assignees: OperationLatency,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            projects: OperationLatency::from_millis(300, 200, 250, 400, 350, 250),
            tasks: OperationLatency::from_millis(300, 200, 250, 400, 350, 250),
            assignees: OperationLatency::from_millis(200, 150, 150, 300, 250, 200),
        }
    }
}

impl LatencyConfig {
    /// Disables every simulated delay.
    ///
    /// Useful for tests and for embedding the stores behind a real transport.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            projects: OperationLatency::none(),
            tasks: OperationLatency::none(),
            assignees: OperationLatency::none(),
        }
    }
}

/// Configuration for building a [`crate::workspace::Workspace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkspaceConfig {
    /// Simulated store latency.
    pub latency: LatencyConfig,
    /// Whether the stores start from the bundled seed fixture.
    pub seed: bool,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            latency: LatencyConfig::default(),
            seed: true,
        }
    }
}

impl WorkspaceConfig {
    /// Empty stores with no latency.
    #[must_use]
    pub const fn empty_instant() -> Self {
        Self {
            latency: LatencyConfig::instant(),
            seed: false,
        }
    }

    /// Seeded stores with no latency.
    #[must_use]
    pub const fn seeded_instant() -> Self {
        Self {
            latency: LatencyConfig::instant(),
            seed: true,
        }
    }
}
