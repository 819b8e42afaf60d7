//! Scripted in-memory database node for bootstrap tests.

use crate::replica_set::{
    domain::{HelloReply, ReplicaSetConfig, ReplicaSetStatus},
    ports::{
        ALREADY_INITIALIZED_CODE, AdminError, AdminResult, NOT_YET_INITIALIZED_CODE,
        ReplicaSetAdmin,
    },
};
use async_trait::async_trait;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard};

/// Member state code reported by a primary.
const PRIMARY_STATE: i32 = 1;

/// Member state code reported by a secondary.
const SECONDARY_STATE: i32 = 2;

/// Number of administrative calls a node has served.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeCallCounts {
    /// `replSetGetStatus` calls.
    pub status: u32,
    /// `hello` calls.
    pub hello: u32,
    /// `replSetInitiate` calls.
    pub initiate: u32,
}

/// In-memory node modelling replica-set initiation and promotion.
///
/// The node starts either uninitiated or as a healthy primary. After a
/// successful initiation it is promoted on the n-th answered `hello`, as
/// configured with [`InMemoryReplicaSetNode::promote_after`]; without that
/// setting it never becomes primary. Transport failures can be scripted for
/// the next `hello` calls or for every status call.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReplicaSetNode {
    state: Arc<Mutex<NodeState>>,
}

#[derive(Debug, Default)]
struct NodeState {
    set_name: Option<String>,
    writable_primary: bool,
    promote_after: Option<u32>,
    answered_hellos_since_initiation: u32,
    unreachable_hellos: u32,
    status_unreachable: bool,
    initiate_error: Option<AdminError>,
    initiated_config: Option<ReplicaSetConfig>,
    calls: NodeCallCounts,
}

impl NodeState {
    const fn is_initiated(&self) -> bool {
        self.set_name.is_some()
    }
}

impl InMemoryReplicaSetNode {
    /// Creates a freshly started node with no replica-set configuration.
    #[must_use]
    pub fn uninitialized() -> Self {
        Self::default()
    }

    /// Creates a node that is already writable primary of `set_name`.
    #[must_use]
    pub fn healthy_primary(set_name: impl Into<String>) -> Self {
        let node = Self::initiated(set_name);
        node.lock_state().writable_primary = true;
        node
    }

    /// Creates a node that belongs to `set_name` but is not primary yet.
    #[must_use]
    pub fn initiated(set_name: impl Into<String>) -> Self {
        let node = Self::default();
        node.lock_state().set_name = Some(set_name.into());
        node
    }

    /// Promotes the node on the `polls`-th answered `hello` after initiation.
    #[must_use]
    pub fn promote_after(self, polls: u32) -> Self {
        self.lock_state().promote_after = Some(polls);
        self
    }

    /// Fails the next `count` `hello` calls with a transport error.
    #[must_use]
    pub fn with_unreachable_hellos(self, count: u32) -> Self {
        self.lock_state().unreachable_hellos = count;
        self
    }

    /// Fails every `replSetGetStatus` call with a transport error.
    #[must_use]
    pub fn with_unreachable_status(self) -> Self {
        self.lock_state().status_unreachable = true;
        self
    }

    /// Fails every `replSetInitiate` call with `error`.
    #[must_use]
    pub fn with_initiate_error(self, error: AdminError) -> Self {
        self.lock_state().initiate_error = Some(error);
        self
    }

    /// Returns the number of calls served so far.
    #[must_use]
    pub fn calls(&self) -> NodeCallCounts {
        self.lock_state().calls
    }

    /// Returns the configuration accepted by the last successful initiation.
    #[must_use]
    pub fn initiated_config(&self) -> Option<ReplicaSetConfig> {
        self.lock_state().initiated_config.clone()
    }

    /// Returns `true` when the node currently accepts writes.
    #[must_use]
    pub fn is_writable_primary(&self) -> bool {
        self.lock_state().writable_primary
    }

    fn lock_state(&self) -> MutexGuard<'_, NodeState> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

fn connection_refused() -> AdminError {
    AdminError::transport(io::Error::new(
        io::ErrorKind::ConnectionRefused,
        "connection refused",
    ))
}

#[async_trait]
impl ReplicaSetAdmin for InMemoryReplicaSetNode {
    async fn replica_set_status(&self) -> AdminResult<ReplicaSetStatus> {
        let mut state = self.lock_state();
        state.calls.status += 1;

        if state.status_unreachable {
            return Err(connection_refused());
        }

        let Some(set_name) = state.set_name.clone() else {
            return Err(AdminError::command(
                NOT_YET_INITIALIZED_CODE,
                "NotYetInitialized",
                "no replset config has been received",
            ));
        };

        let mut status = ReplicaSetStatus::new(1.0).with_set(set_name);
        status.my_state = Some(if state.writable_primary {
            PRIMARY_STATE
        } else {
            SECONDARY_STATE
        });
        Ok(status)
    }

    async fn hello(&self) -> AdminResult<HelloReply> {
        let mut state = self.lock_state();
        state.calls.hello += 1;

        if state.unreachable_hellos > 0 {
            state.unreachable_hellos -= 1;
            return Err(connection_refused());
        }

        if state.is_initiated() && !state.writable_primary {
            state.answered_hellos_since_initiation += 1;
            let answered = state.answered_hellos_since_initiation;
            if state.promote_after.is_some_and(|polls| answered >= polls) {
                state.writable_primary = true;
            }
        }

        let reply = HelloReply::writable_primary(state.writable_primary);
        Ok(match state.set_name.clone() {
            Some(set_name) => reply.with_set_name(set_name),
            None => reply,
        })
    }

    async fn initiate(&self, config: &ReplicaSetConfig) -> AdminResult<()> {
        let mut state = self.lock_state();
        state.calls.initiate += 1;

        if let Some(error) = state.initiate_error.clone() {
            return Err(error);
        }

        if state.is_initiated() {
            return Err(AdminError::command(
                ALREADY_INITIALIZED_CODE,
                "AlreadyInitialized",
                "already initialized",
            ));
        }

        state.set_name = Some(config.name().as_str().to_owned());
        state.initiated_config = Some(config.clone());
        Ok(())
    }
}
