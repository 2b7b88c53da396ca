//! Simulated per-operation latency.

use std::time::Duration;

/// Delays applied to each kind of store operation.
///
/// The delay suspends only the calling task; other operations keep running
/// while it is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OperationLatency {
    /// Delay before returning every record.
    pub list: Duration,
    /// Delay before a single-record lookup.
    pub get: Duration,
    /// Delay before a filtered query (by project, text search).
    pub query: Duration,
    /// Delay before inserting a record.
    pub create: Duration,
    /// Delay before merging a partial update.
    pub update: Duration,
    /// Delay before removing a record.
    pub delete: Duration,
}

impl OperationLatency {
    /// Latency profile with every delay disabled.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            list: Duration::ZERO,
            get: Duration::ZERO,
            query: Duration::ZERO,
            create: Duration::ZERO,
            update: Duration::ZERO,
            delete: Duration::ZERO,
        }
    }

    /// Builds a profile from millisecond values in
    /// `list, get, query, create, update, delete` order.
    #[must_use]
    pub const fn from_millis(
        list: u64,
        get: u64,
        query: u64,
        create: u64,
        update: u64,
        delete: u64,
    ) -> Self {
        Self {
            list: Duration::from_millis(list),
            get: Duration::from_millis(get),
            query: Duration::from_millis(query),
            create: Duration::from_millis(create),
            update: Duration::from_millis(update),
            delete: Duration::from_millis(delete),
        }
    }
}

/// Suspends the calling task for `delay`, skipping the timer when zero.
pub(crate) async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
