//! Read models derived from task and project lists.
//!
//! Everything here is a pure, synchronous transformation over records the
//! caller already fetched: the column board, the caller-side board cache
//! that reconciles against authoritative store responses, and the archive,
//! timeline and stats views.

mod archive;
mod cache;
mod column;
mod projection;
mod stats;
mod timeline;

pub use archive::ArchiveView;
pub use cache::{BoardCache, DropOutcome};
pub use column::Column;
pub use projection::{Board, ColumnGroup, filter_by_search, group_by_status};
pub use stats::WorkspaceStats;
pub use timeline::{Timeline, TimelineEntry, TimelineWindow};

#[cfg(test)]
mod tests;
