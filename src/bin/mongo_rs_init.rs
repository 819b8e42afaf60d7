//! Initiates a single-node MongoDB replica set and waits for it to become
//! writable primary.
//!
//! Usage:
//!
//! ```text
//! mongo_rs_init [--uri <uri>] [--member-host <host:port>] [--replica-set <name>]
//!               [--poll-attempts <n>] [--poll-interval <duration>]
//!               [--strict-initiate] [--log-format compact|json]
//! ```
//!
//! Every flag has an environment fallback (`MONGO_RS_URI`,
//! `MONGO_RS_MEMBER_HOST`, `MONGO_RS_NAME`, `MONGO_RS_POLL_ATTEMPTS`,
//! `MONGO_RS_POLL_INTERVAL`, `MONGO_RS_STRICT_INITIATE`,
//! `MONGO_RS_LOG_FORMAT`). Running it twice against a node that is already
//! primary is a no-op.
//!
//! Exit codes:
//!
//! - `0`: the node is writable primary
//! - `1`: the node did not become writable primary within the polling bound,
//!   or strict mode saw the configuration rejected
//! - `2`: the configuration or connection URI is invalid, or the SRV lookup
//!   of a `mongodb+srv://` URI failed

use clap::Parser;
use mongo_rs_bootstrap::{
    config::{BootstrapArgs, BootstrapSettings, ConfigError},
    replica_set::{
        adapters::{MongoReplicaSetAdmin, TokioSleeper},
        ports::AdminError,
        services::ReplicaSetBootstrapper,
    },
    telemetry::{self, TelemetryError},
};
use std::process::ExitCode;
use std::sync::Arc;
use thiserror::Error;
use tokio::runtime::Builder;
use tracing::error;

/// Exit code for a run that never reached the database.
///
/// A `mongodb+srv://` URI is resolved through DNS before the client exists,
/// so a resolver failure during container start-up also ends here instead of
/// being polled like an unreachable node. Use a plain `mongodb://` URI when
/// the bootstrap may race the resolver.
const STARTUP_FAILURE_EXIT_CODE: u8 = 2;

/// Errors that stop the binary before the bootstrap procedure starts.
#[derive(Debug, Error)]
enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("runtime init failed: {0}")]
    RuntimeInit(#[source] std::io::Error),
    #[error("failed to create MongoDB client: {0}")]
    Connect(#[source] AdminError),
}

fn main() -> ExitCode {
    let args = BootstrapArgs::parse();
    if let Err(err) = telemetry::init_logging(args.log_format) {
        report_logging_failure(&err);
        return ExitCode::from(STARTUP_FAILURE_EXIT_CODE);
    }

    match run(args) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            error!(error = %err, "bootstrap did not start");
            ExitCode::from(STARTUP_FAILURE_EXIT_CODE)
        }
    }
}

#[expect(
    clippy::print_stderr,
    reason = "no subscriber is installed to carry the error"
)]
fn report_logging_failure(err: &TelemetryError) {
    eprintln!("mongo_rs_init: {err}");
}

fn run(args: BootstrapArgs) -> Result<u8, StartupError> {
    let settings = BootstrapSettings::try_from(args)?;
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(StartupError::RuntimeInit)?;
    runtime.block_on(bootstrap(settings))
}

async fn bootstrap(settings: BootstrapSettings) -> Result<u8, StartupError> {
    let admin = MongoReplicaSetAdmin::connect(&settings.uri)
        .await
        .map_err(StartupError::Connect)?;
    let bootstrapper =
        ReplicaSetBootstrapper::new(Arc::new(admin), Arc::new(TokioSleeper), settings.replica_set)
            .with_poll_policy(settings.poll_policy)
            .with_initiation_policy(settings.initiation_policy);

    let report = bootstrapper.run().await;
    Ok(report.exit_code())
}
