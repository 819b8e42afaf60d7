//! Port contracts for replica-set bootstrap.
//!
//! Ports define driver-agnostic interfaces used by the bootstrap service.

mod admin;
mod sleeper;

#[cfg(test)]
pub use admin::MockReplicaSetAdmin;
pub use admin::{
    ALREADY_INITIALIZED_CODE, AdminError, AdminResult, NOT_YET_INITIALIZED_CODE, ReplicaSetAdmin,
};
pub use sleeper::Sleeper;
