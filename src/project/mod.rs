//! Projects: the containers tasks belong to.
//!
//! Projects can be archived and restored. Deleting a project leaves its
//! tasks in place; they stay reachable through their project identifier.
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
