//! Taskboard: task lifecycle and board-state management for a kanban
//! tracker.
//!
//! Projects contain tasks that move between `todo`, `in-progress` and
//! `done` columns. The crate holds the records in in-memory stores with
//! simulated latency, enforces the task completion-timestamp rule, and
//! derives the board, archive, timeline and stats read models a user
//! interface renders.
//!
//! # Architecture
//!
//! Each record kind follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage
//! - **Adapters**: In-memory implementations of the ports
//! - **Services**: Validation and orchestration over a port
//!
//! # Modules
//!
//! - [`project`]: Projects, archiving and restoring
//! - [`task`]: Task lifecycle and status transitions
//! - [`assignee`]: People tasks are assigned to
//! - [`board`]: Column board and derived views
//! - [`workspace`]: Composition root sharing one set of stores

pub mod assignee;
pub mod board;
pub mod clock;
pub mod config;
pub mod project;
pub mod seed;
pub mod store;
pub mod task;
pub mod workspace;
