//! Validated replica-set identity and single-member configuration.

use super::ReplicaSetDomainError;
use std::fmt;

/// Member `_id` assigned to the only member of the set.
pub const PRIMARY_MEMBER_ID: i32 = 0;

/// Validated replica-set name, sent as the `_id` of the initiation document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReplicaSetName(String);

impl ReplicaSetName {
    /// Creates a validated replica-set name.
    ///
    /// The input is trimmed. Whitespace, path separators, `.` and NUL are
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ReplicaSetDomainError`] when validation fails.
    pub fn new(value: impl Into<String>) -> Result<Self, ReplicaSetDomainError> {
        let normalized = value.into().trim().to_owned();

        if normalized.is_empty() {
            return Err(ReplicaSetDomainError::EmptyReplicaSetName);
        }

        let is_valid = normalized.chars().all(|character| {
            !character.is_whitespace() && !matches!(character, '/' | '\\' | '.' | '\0')
        });
        if !is_valid {
            return Err(ReplicaSetDomainError::InvalidReplicaSetName(normalized));
        }

        Ok(Self(normalized))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ReplicaSetName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ReplicaSetName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Validated `host` or `host:port` address the member advertises.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberHost(String);

impl MemberHost {
    /// Creates a validated member host.
    ///
    /// # Errors
    ///
    /// Returns [`ReplicaSetDomainError`] when the host is empty, contains
    /// whitespace, or carries a port that is not a non-zero `u16`.
    pub fn new(value: impl Into<String>) -> Result<Self, ReplicaSetDomainError> {
        let normalized = value.into().trim().to_owned();

        if normalized.is_empty() {
            return Err(ReplicaSetDomainError::EmptyMemberHost);
        }

        if !is_valid_host(&normalized) {
            return Err(ReplicaSetDomainError::InvalidMemberHost(normalized));
        }

        Ok(Self(normalized))
    }

    /// Returns the host as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_valid_host(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    match value.rsplit_once(':') {
        None => true,
        Some((host, port)) => {
            !host.is_empty() && port.parse::<u16>().is_ok_and(|parsed| parsed != 0)
        }
    }
}

impl AsRef<str> for MemberHost {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for MemberHost {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Configuration of a one-member replica set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplicaSetConfig {
    name: ReplicaSetName,
    member_host: MemberHost,
}

impl ReplicaSetConfig {
    /// Creates a configuration with a single member at `member_host`.
    #[must_use]
    pub const fn single_member(name: ReplicaSetName, member_host: MemberHost) -> Self {
        Self { name, member_host }
    }

    /// Returns the replica-set name.
    #[must_use]
    pub const fn name(&self) -> &ReplicaSetName {
        &self.name
    }

    /// Returns the host of the only member.
    #[must_use]
    pub const fn member_host(&self) -> &MemberHost {
        &self.member_host
    }

    /// Returns the `_id` of the only member.
    #[must_use]
    pub const fn member_id(&self) -> i32 {
        PRIMARY_MEMBER_ID
    }
}
