//! Three-valued reading of a node's writable-primary state.

use std::fmt;

/// Result of one writable-primary check.
///
/// Only [`NodeObservation::Ready`] lets the bootstrap finish; the other two
/// variants both mean "try the next step", but stay distinct so logs and
/// tests can tell a node that answered from one that did not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeObservation {
    /// The node answered and reports itself as writable primary.
    Ready,
    /// The node answered but is not writable primary yet.
    NotReady,
    /// The node could not be reached or the query failed in transport.
    Unreachable {
        /// Driver-level failure description.
        reason: String,
    },
}

impl NodeObservation {
    /// Creates an unreachable observation.
    #[must_use]
    pub fn unreachable(reason: impl Into<String>) -> Self {
        Self::Unreachable {
            reason: reason.into(),
        }
    }

    /// Returns `true` when the node is writable primary.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Returns the canonical label used in log fields.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::NotReady => "not_ready",
            Self::Unreachable { .. } => "unreachable",
        }
    }
}

impl fmt::Display for NodeObservation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
