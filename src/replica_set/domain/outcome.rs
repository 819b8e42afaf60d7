//! Outcomes of the individual bootstrap steps and of the whole run.

use std::fmt;
use std::time::Duration;

/// How the bootstrapper treats a genuine initiation rejection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InitiationPolicy {
    /// Every initiation failure is absorbed and polling continues.
    #[default]
    Lenient,
    /// A rejection other than "already initialised" ends the run.
    Strict,
}

/// Classified result of the single `replSetInitiate` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitiationOutcome {
    /// The server accepted the configuration.
    Accepted,
    /// The node already has a replica-set configuration.
    AlreadyInitialized,
    /// The server refused the configuration for another reason.
    Rejected {
        /// Server error code.
        code: i32,
        /// Server error code name.
        code_name: String,
        /// Server error message.
        message: String,
    },
    /// The request did not reach the server.
    Unreachable {
        /// Driver-level failure description.
        reason: String,
    },
}

impl InitiationOutcome {
    /// Returns `true` for a rejection that is not "already initialised".
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// Returns the canonical label used in log fields.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::AlreadyInitialized => "already_initialized",
            Self::Rejected { .. } => "rejected",
            Self::Unreachable { .. } => "unreachable",
        }
    }
}

impl fmt::Display for InitiationOutcome {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected {
                code,
                code_name,
                message,
            } => write!(formatter, "rejected ({code} {code_name}): {message}"),
            Self::Unreachable { reason } => write!(formatter, "unreachable: {reason}"),
            Self::Accepted | Self::AlreadyInitialized => formatter.write_str(self.as_str()),
        }
    }
}

/// Result of the bounded writable-primary polling loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// The node was observed as writable primary on attempt `attempts`.
    Promoted {
        /// One-based attempt that observed the promotion.
        attempts: u32,
    },
    /// Every attempt observed a node that was not writable primary.
    Exhausted {
        /// Number of attempts made.
        attempts: u32,
    },
}

impl PollOutcome {
    /// Returns `true` when the node was observed as writable primary.
    #[must_use]
    pub const fn is_promoted(&self) -> bool {
        matches!(self, Self::Promoted { .. })
    }

    /// Returns the number of polling queries issued.
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        match self {
            Self::Promoted { attempts } | Self::Exhausted { attempts } => *attempts,
        }
    }
}

/// Final outcome of a bootstrap run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// The node was already writable primary; nothing was changed.
    AlreadyPrimary,
    /// The node became writable primary while polling.
    BecamePrimary {
        /// One-based attempt that observed the promotion.
        attempts: u32,
    },
    /// The polling bound was exhausted.
    TimedOut {
        /// Number of polling queries issued.
        attempts: u32,
    },
    /// Strict mode stopped after the server rejected the configuration.
    InitiationRejected,
}

impl BootstrapOutcome {
    /// Returns `true` when the node is confirmed writable primary.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::AlreadyPrimary | Self::BecamePrimary { .. })
    }

    /// Returns the process exit code for this outcome.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        if self.is_success() { 0 } else { 1 }
    }

    /// Returns the canonical label used in log fields.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AlreadyPrimary => "already_primary",
            Self::BecamePrimary { .. } => "became_primary",
            Self::TimedOut { .. } => "timed_out",
            Self::InitiationRejected => "initiation_rejected",
        }
    }
}

impl From<PollOutcome> for BootstrapOutcome {
    fn from(outcome: PollOutcome) -> Self {
        match outcome {
            PollOutcome::Promoted { attempts } => Self::BecamePrimary { attempts },
            PollOutcome::Exhausted { attempts } => Self::TimedOut { attempts },
        }
    }
}

impl fmt::Display for BootstrapOutcome {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Summary of a bootstrap run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapReport {
    outcome: BootstrapOutcome,
    initiation: Option<InitiationOutcome>,
    elapsed: Duration,
}

impl BootstrapReport {
    /// Creates a report.
    #[must_use]
    pub const fn new(
        outcome: BootstrapOutcome,
        initiation: Option<InitiationOutcome>,
        elapsed: Duration,
    ) -> Self {
        Self {
            outcome,
            initiation,
            elapsed,
        }
    }

    /// Returns the final outcome.
    #[must_use]
    pub const fn outcome(&self) -> BootstrapOutcome {
        self.outcome
    }

    /// Returns the initiation outcome, or `None` when the node was already
    /// primary and no initiation was sent.
    #[must_use]
    pub const fn initiation(&self) -> Option<&InitiationOutcome> {
        self.initiation.as_ref()
    }

    /// Returns the wall time the run took.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Returns the process exit code for the run.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.outcome.exit_code()
    }
}
