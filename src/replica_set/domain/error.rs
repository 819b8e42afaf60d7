//! Error types for replica-set domain validation.

use thiserror::Error;

/// Errors returned while constructing replica-set domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReplicaSetDomainError {
    /// The replica-set name is empty after trimming.
    #[error("replica set name must not be empty")]
    EmptyReplicaSetName,

    /// The replica-set name contains whitespace or a reserved character.
    #[error(
        "replica set name '{0}' contains invalid characters (whitespace, '/', '\\', '.' and NUL are not allowed)"
    )]
    InvalidReplicaSetName(String),

    /// The member host is empty after trimming.
    #[error("member host must not be empty")]
    EmptyMemberHost,

    /// The member host is not a `host` or `host:port` pair.
    #[error("member host '{0}' must be 'host' or 'host:port' with a non-zero port")]
    InvalidMemberHost(String),

    /// The polling policy allows no attempts.
    #[error("poll attempts must be at least 1")]
    ZeroPollAttempts,
}
