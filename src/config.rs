//! Command-line and environment configuration for the bootstrap binary.
//!
//! Every setting can be given as a flag or through its environment variable;
//! flags win. Raw arguments are validated into [`BootstrapSettings`] before
//! any database call is made.

use crate::replica_set::domain::{
    DEFAULT_POLL_ATTEMPTS, InitiationPolicy, MemberHost, PollPolicy, ReplicaSetConfig,
    ReplicaSetDomainError, ReplicaSetName,
};
use crate::telemetry::LogFormat;
use clap::Parser;
use std::time::Duration;
use thiserror::Error;

/// Connection URI used when none is configured.
pub const DEFAULT_URI: &str = "mongodb://bench_mongo:27017/?directConnection=true";

/// Member host used when none is configured.
pub const DEFAULT_MEMBER_HOST: &str = "bench_mongo:27017";

/// Replica-set name used when none is configured.
pub const DEFAULT_REPLICA_SET: &str = "rs0";

const URI_SCHEMES: [&str; 2] = ["mongodb://", "mongodb+srv://"];

/// Raw command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(name = "mongo_rs_init")]
#[command(about = "Initiate a single-node MongoDB replica set and wait for it to become primary")]
pub struct BootstrapArgs {
    /// Connection URI of the target node
    #[arg(long, env = "MONGO_RS_URI", default_value = DEFAULT_URI)]
    pub uri: String,

    /// Host:port the only replica-set member advertises
    #[arg(long, env = "MONGO_RS_MEMBER_HOST", default_value = DEFAULT_MEMBER_HOST)]
    pub member_host: String,

    /// Replica-set name
    #[arg(long, env = "MONGO_RS_NAME", default_value = DEFAULT_REPLICA_SET)]
    pub replica_set: String,

    /// Maximum number of writable-primary checks
    #[arg(long, env = "MONGO_RS_POLL_ATTEMPTS", default_value_t = DEFAULT_POLL_ATTEMPTS)]
    pub poll_attempts: u32,

    /// Pause after each negative check (e.g. "1s", "500ms")
    #[arg(
        long,
        env = "MONGO_RS_POLL_INTERVAL",
        default_value = "1s",
        value_parser = humantime::parse_duration
    )]
    pub poll_interval: Duration,

    /// Fail instead of polling when the server rejects the configuration
    #[arg(long, env = "MONGO_RS_STRICT_INITIATE")]
    pub strict_initiate: bool,

    /// Log output format
    #[arg(long, env = "MONGO_RS_LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Errors raised while validating configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A replica-set value failed domain validation.
    #[error(transparent)]
    Domain(#[from] ReplicaSetDomainError),

    /// The connection URI does not use a MongoDB scheme.
    #[error("connection URI '{0}' must start with 'mongodb://' or 'mongodb+srv://'")]
    InvalidUri(String),
}

/// Validated bootstrap settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapSettings {
    /// Connection URI of the target node.
    pub uri: String,
    /// Replica set to initiate.
    pub replica_set: ReplicaSetConfig,
    /// Polling bound and interval.
    pub poll_policy: PollPolicy,
    /// Treatment of initiation rejections.
    pub initiation_policy: InitiationPolicy,
    /// Log output format.
    pub log_format: LogFormat,
}

impl TryFrom<BootstrapArgs> for BootstrapSettings {
    type Error = ConfigError;

    fn try_from(args: BootstrapArgs) -> Result<Self, Self::Error> {
        let uri = args.uri.trim().to_owned();
        if !URI_SCHEMES.iter().any(|scheme| uri.starts_with(scheme)) {
            return Err(ConfigError::InvalidUri(uri));
        }

        let replica_set = ReplicaSetConfig::single_member(
            ReplicaSetName::new(args.replica_set)?,
            MemberHost::new(args.member_host)?,
        );
        let poll_policy = PollPolicy::new(args.poll_attempts, args.poll_interval)?;
        let initiation_policy = if args.strict_initiate {
            InitiationPolicy::Strict
        } else {
            InitiationPolicy::Lenient
        };

        Ok(Self {
            uri,
            replica_set,
            poll_policy,
            initiation_policy,
            log_format: args.log_format,
        })
    }
}
