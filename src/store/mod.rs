//! Shared building blocks for the in-memory entity stores.
//!
//! Every record kind (projects, tasks, assignees) is held in an ordered
//! collection keyed by a positive integer identifier. Identifiers are
//! allocated as `max(existing) + 1`, lookups accept loosely formatted keys,
//! and each store operation is delayed by a configurable latency to model a
//! remote backend.

mod collection;
mod id;
pub(crate) mod latency;

pub use collection::{Collection, Record};
pub use id::RecordKey;
pub use latency::OperationLatency;

pub(crate) use id::{deserialize_optional_key, record_id};
