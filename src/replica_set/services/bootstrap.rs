//! Service layer for single-node replica-set bootstrap.

use crate::replica_set::{
    domain::{
        BootstrapOutcome, BootstrapReport, InitiationOutcome, InitiationPolicy, NodeObservation,
        PollOutcome, PollPolicy, ReplicaSetConfig,
    },
    ports::{AdminError, ReplicaSetAdmin, Sleeper},
};
use std::sync::Arc;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Drives a node to writable primary of a one-member replica set.
///
/// Every failure of an individual administrative call is absorbed and turned
/// into a retry decision; only the exhaustion of the polling bound (or, in
/// strict mode, a genuine initiation rejection) ends the run unsuccessfully.
#[derive(Clone)]
pub struct ReplicaSetBootstrapper<A, S>
where
    A: ReplicaSetAdmin,
    S: Sleeper,
{
    admin: Arc<A>,
    sleeper: Arc<S>,
    config: ReplicaSetConfig,
    poll_policy: PollPolicy,
    initiation_policy: InitiationPolicy,
}

impl<A, S> ReplicaSetBootstrapper<A, S>
where
    A: ReplicaSetAdmin,
    S: Sleeper,
{
    /// Creates a bootstrapper with the default polling and lenient
    /// initiation policies.
    #[must_use]
    pub fn new(admin: Arc<A>, sleeper: Arc<S>, config: ReplicaSetConfig) -> Self {
        Self {
            admin,
            sleeper,
            config,
            poll_policy: PollPolicy::default(),
            initiation_policy: InitiationPolicy::default(),
        }
    }

    /// Replaces the polling policy.
    #[must_use]
    pub const fn with_poll_policy(mut self, poll_policy: PollPolicy) -> Self {
        self.poll_policy = poll_policy;
        self
    }

    /// Replaces the initiation policy.
    #[must_use]
    pub const fn with_initiation_policy(mut self, initiation_policy: InitiationPolicy) -> Self {
        self.initiation_policy = initiation_policy;
        self
    }

    /// Returns the replica-set configuration this bootstrapper initiates.
    #[must_use]
    pub const fn config(&self) -> &ReplicaSetConfig {
        &self.config
    }

    /// Runs the full bootstrap procedure.
    ///
    /// At most one initiation request is sent. The returned report never
    /// carries an error: recoverable failures are logged and absorbed.
    pub async fn run(&self) -> BootstrapReport {
        let started = Instant::now();
        info!(
            replica_set = %self.config.name(),
            member_host = %self.config.member_host(),
            max_attempts = self.poll_policy.max_attempts(),
            interval = ?self.poll_policy.interval(),
            "bootstrapping replica set"
        );

        if self.check_already_primary().await {
            info!("node is already writable primary; nothing to do");
            return BootstrapReport::new(BootstrapOutcome::AlreadyPrimary, None, started.elapsed());
        }

        let initiation = self.initiate().await;
        if initiation.is_rejected() && self.initiation_policy == InitiationPolicy::Strict {
            warn!(initiation = %initiation, "strict initiation: stopping without polling");
            return BootstrapReport::new(
                BootstrapOutcome::InitiationRejected,
                Some(initiation),
                started.elapsed(),
            );
        }

        let outcome = BootstrapOutcome::from(self.poll_until_primary().await);
        let report = BootstrapReport::new(outcome, Some(initiation), started.elapsed());
        if outcome.is_success() {
            info!(outcome = %outcome, elapsed = ?report.elapsed(), "node is writable primary");
        } else {
            warn!(
                outcome = %outcome,
                elapsed = ?report.elapsed(),
                "node did not become writable primary"
            );
        }
        report
    }

    /// Returns `true` when replication status is healthy and the node
    /// already reports itself as writable primary.
    ///
    /// A failed status query (typically "not yet initialised"), a status that
    /// is not ok, or a failed `hello` all count as "not primary yet".
    pub async fn check_already_primary(&self) -> bool {
        match self.admin.replica_set_status().await {
            Ok(status) if status.is_ok() => {
                debug!(set = ?status.set, my_state = ?status.my_state, "replication status ok");
                self.observe_primary().await.is_ready()
            }
            Ok(status) => {
                debug!(ok = status.ok, "replication status not ok");
                false
            }
            Err(err) => {
                debug!(error = %err, "replication status unavailable");
                false
            }
        }
    }

    /// Sends the single `replSetInitiate` request and classifies the reply.
    pub async fn initiate(&self) -> InitiationOutcome {
        let outcome = match self.admin.initiate(&self.config).await {
            Ok(()) => InitiationOutcome::Accepted,
            Err(err) if err.is_already_initialized() => InitiationOutcome::AlreadyInitialized,
            Err(AdminError::Command {
                code,
                code_name,
                message,
            }) => InitiationOutcome::Rejected {
                code,
                code_name,
                message,
            },
            Err(AdminError::Transport(err)) => InitiationOutcome::Unreachable {
                reason: err.to_string(),
            },
        };

        match &outcome {
            InitiationOutcome::Accepted | InitiationOutcome::AlreadyInitialized => {
                info!(initiation = %outcome, "replica set initiation finished");
            }
            InitiationOutcome::Rejected { .. } | InitiationOutcome::Unreachable { .. } => {
                warn!(initiation = %outcome, "replica set initiation failed");
            }
        }
        outcome
    }

    /// Queries `hello` once and classifies the reply.
    pub async fn observe_primary(&self) -> NodeObservation {
        match self.admin.hello().await {
            Ok(reply) => {
                if let Some(set_name) = reply
                    .set_name
                    .as_deref()
                    .filter(|advertised| *advertised != self.config.name().as_str())
                {
                    warn!(
                        advertised = set_name,
                        configured = %self.config.name(),
                        "node advertises a different replica set name"
                    );
                }
                if reply.is_writable_primary() {
                    NodeObservation::Ready
                } else {
                    NodeObservation::NotReady
                }
            }
            Err(AdminError::Command { code_name, .. }) => {
                debug!(code_name = %code_name, "hello rejected by server");
                NodeObservation::NotReady
            }
            Err(AdminError::Transport(err)) => NodeObservation::unreachable(err.to_string()),
        }
    }

    /// Polls `hello` until the node is writable primary or the attempt bound
    /// is exhausted.
    ///
    /// The configured interval is slept after every negative attempt,
    /// including the last one.
    pub async fn poll_until_primary(&self) -> PollOutcome {
        let max_attempts = self.poll_policy.max_attempts();
        for attempt in 1..=max_attempts {
            let observation = self.observe_primary().await;
            if observation.is_ready() {
                return PollOutcome::Promoted { attempts: attempt };
            }
            debug!(
                attempt,
                max_attempts,
                observation = ?observation,
                "node not writable primary yet"
            );
            self.sleeper.sleep(self.poll_policy.interval()).await;
        }
        PollOutcome::Exhausted {
            attempts: max_attempts,
        }
    }
}
