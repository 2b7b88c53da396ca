//! Assignees: the people tasks can be given to.
//!
//! Unlike projects and tasks, assignee creation is checked by the store
//! itself: a name and a well-formed email are required, and emails are
//! unique ignoring case.
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
