//! Adapter implementations for assignee ports.

pub mod memory;
