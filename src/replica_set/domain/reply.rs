//! Read-only views of administrative command replies.
//!
//! Only the fields the bootstrap procedure reads are modelled; everything
//! else in the server reply is ignored during deserialisation.

use serde::Deserialize;

/// Relevant fields of a `replSetGetStatus` reply.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReplicaSetStatus {
    /// Command status flag; `1` when the node is a configured set member.
    #[serde(default)]
    pub ok: f64,
    /// Name of the replica set the node belongs to.
    #[serde(default)]
    pub set: Option<String>,
    /// Member state code of the node (`1` is primary).
    #[serde(default, rename = "myState")]
    pub my_state: Option<i32>,
}

impl ReplicaSetStatus {
    /// Creates a status view with the given `ok` flag.
    #[must_use]
    pub const fn new(ok: f64) -> Self {
        Self {
            ok,
            set: None,
            my_state: None,
        }
    }

    /// Sets the replica-set name.
    #[must_use]
    pub fn with_set(mut self, set: impl Into<String>) -> Self {
        self.set = Some(set.into());
        self
    }

    /// Returns `true` when the server reported the status as healthy.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.ok > 0.0
    }
}

/// Relevant fields of a `hello` reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HelloReply {
    /// Whether the node currently accepts writes as primary.
    ///
    /// Legacy `ismaster` keys are ignored: servers that answer `hello` always
    /// report `isWritablePrimary`.
    #[serde(default, rename = "isWritablePrimary")]
    pub is_writable_primary: Option<bool>,
    /// Replica-set name advertised by the node, if it is a member.
    #[serde(default, rename = "setName")]
    pub set_name: Option<String>,
}

impl HelloReply {
    /// Creates a reply reporting the given writable-primary flag.
    #[must_use]
    pub const fn writable_primary(flag: bool) -> Self {
        Self {
            is_writable_primary: Some(flag),
            set_name: None,
        }
    }

    /// Sets the advertised replica-set name.
    #[must_use]
    pub fn with_set_name(mut self, set_name: impl Into<String>) -> Self {
        self.set_name = Some(set_name.into());
        self
    }

    /// Returns `true` only when the flag is present and `true`.
    #[must_use]
    pub fn is_writable_primary(&self) -> bool {
        self.is_writable_primary == Some(true)
    }
}
