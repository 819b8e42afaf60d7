//! Administrative command port for a single database node.

use crate::replica_set::domain::{HelloReply, ReplicaSetConfig, ReplicaSetStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Server error code returned by `replSetInitiate` on an initialised node.
pub const ALREADY_INITIALIZED_CODE: i32 = 23;

/// Server error code returned by `replSetGetStatus` before initiation.
pub const NOT_YET_INITIALIZED_CODE: i32 = 94;

/// Result type for administrative commands.
pub type AdminResult<T> = Result<T, AdminError>;

/// Administrative commands the bootstrapper issues against the node.
///
/// Implementations hold their own connection; the bootstrapper never opens
/// or configures one.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReplicaSetAdmin: Send + Sync {
    /// Reads the replication status (`replSetGetStatus`).
    async fn replica_set_status(&self) -> AdminResult<ReplicaSetStatus>;

    /// Reads the node role (`hello`).
    async fn hello(&self) -> AdminResult<HelloReply>;

    /// Initiates a replica set with the given configuration
    /// (`replSetInitiate`).
    async fn initiate(&self, config: &ReplicaSetConfig) -> AdminResult<()>;
}

/// Errors returned by administrative command adapters.
#[derive(Debug, Clone, Error)]
pub enum AdminError {
    /// The server executed the command and returned an error.
    #[error("command failed with {code} ({code_name}): {message}")]
    Command {
        /// Server error code.
        code: i32,
        /// Server error code name.
        code_name: String,
        /// Server error message.
        message: String,
    },

    /// The command did not complete (selection, network, or decoding).
    #[error("administrative transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl AdminError {
    /// Creates a command error.
    pub fn command(code: i32, code_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Command {
            code,
            code_name: code_name.into(),
            message: message.into(),
        }
    }

    /// Wraps a transport error from the adapter.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Returns `true` when the server reported the set as already initialised.
    #[must_use]
    pub fn is_already_initialized(&self) -> bool {
        match self {
            Self::Command {
                code, code_name, ..
            } => *code == ALREADY_INITIALIZED_CODE || code_name == "AlreadyInitialized",
            Self::Transport(_) => false,
        }
    }
}
