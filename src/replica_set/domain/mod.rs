//! Domain model for replica-set bootstrap.
//!
//! The domain captures the validated replica-set configuration, the polling
//! policy, the read-only observations taken from the node, and the outcomes
//! of each bootstrap step. Driver and runtime concerns remain outside this
//! boundary.

mod config;
mod error;
mod observation;
mod outcome;
mod policy;
mod reply;

pub use config::{MemberHost, PRIMARY_MEMBER_ID, ReplicaSetConfig, ReplicaSetName};
pub use error::ReplicaSetDomainError;
pub use observation::NodeObservation;
pub use outcome::{
    BootstrapOutcome, BootstrapReport, InitiationOutcome, InitiationPolicy, PollOutcome,
};
pub use policy::{DEFAULT_POLL_ATTEMPTS, DEFAULT_POLL_INTERVAL, PollPolicy};
pub use reply::{HelloReply, ReplicaSetStatus};
