//! Shared world state for replica-set bootstrap BDD scenarios.

use std::sync::Arc;

use mongo_rs_bootstrap::replica_set::{
    adapters::memory::{InMemoryReplicaSetNode, RecordingSleeper},
    domain::{BootstrapReport, InitiationPolicy, ReplicaSetConfig},
};
use rstest::fixture;

/// Scenario world for replica-set bootstrap behaviour tests.
pub struct BootstrapWorld {
    /// Scripted node the bootstrapper talks to.
    pub node: InMemoryReplicaSetNode,
    /// Records every pause instead of sleeping.
    pub sleeper: Arc<RecordingSleeper>,
    /// Treatment of rejected initiation.
    pub initiation_policy: InitiationPolicy,
    /// Replica set requested by the most recent run.
    pub config: Option<ReplicaSetConfig>,
    /// Reports of every run, oldest first.
    pub reports: Vec<BootstrapReport>,
}

impl BootstrapWorld {
    /// Creates a world around an uninitialised node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            node: InMemoryReplicaSetNode::uninitialized(),
            sleeper: Arc::new(RecordingSleeper::new()),
            initiation_policy: InitiationPolicy::Lenient,
            config: None,
            reports: Vec::new(),
        }
    }

    /// Returns the report of the most recent run.
    pub fn last_report(&self) -> Result<&BootstrapReport, eyre::Report> {
        self.reports
            .last()
            .ok_or_else(|| eyre::eyre!("no bootstrap run recorded in scenario world"))
    }
}

impl Default for BootstrapWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BootstrapWorld {
    BootstrapWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
