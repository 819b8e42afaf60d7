//! mongo-rs-bootstrap: single-node MongoDB replica-set bootstrap.
//!
//! This crate turns a freshly started MongoDB node into the writable primary
//! of a one-member replica set, so benchmark clients that connect with a
//! `replicaSet` option can start against a single container.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: validated configuration, observations, and outcomes
//! - **Ports**: the administrative command and pacing interfaces
//! - **Adapters**: the MongoDB driver, tokio, and in-memory implementations
//!
//! # Modules
//!
//! - [`replica_set`]: bootstrap procedure and its ports and adapters
//! - [`config`]: command-line and environment configuration
//! - [`telemetry`]: structured logging setup

pub mod config;
pub mod replica_set;
pub mod telemetry;
