//! Task lifecycle management.
//!
//! Tasks are created inside a project, patched field by field, and moved
//! between board columns. The lifecycle service owns the rule that a task
//! carries a completion timestamp exactly while it is done, and validates
//! drafts and patches before they reach the store.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
