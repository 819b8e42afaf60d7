//! Single-node replica-set bootstrap for benchmark environments.
//!
//! This module ensures a MongoDB node is configured as a one-member replica
//! set and reports itself as writable primary. The procedure is linear: check
//! whether the node is already primary, otherwise initiate the set once and
//! poll `hello` until the node is promoted or the attempt bound is exhausted.
//! The module follows hexagonal architecture:
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
