//! Authenticated identity produced by the credential gate

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Principal that passed the credential gate.
///
/// Built once per request from validated credentials and dropped after
/// the response is sent. The authority set is a `BTreeSet` so the
/// rendered scope is sorted by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    subject: String,
    authorities: BTreeSet<String>,
}

impl Identity {
    /// Create a new identity. The subject must be non-empty; an empty
    /// authority set is legal and yields an empty scope.
    pub fn new(
        subject: impl Into<String>,
        authorities: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, DomainError> {
        let subject = subject.into();

        if subject.trim().is_empty() {
            return Err(DomainError::validation("identity subject must not be empty"));
        }

        Ok(Self {
            subject,
            authorities: authorities.into_iter().map(Into::into).collect(),
        })
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn authorities(&self) -> &BTreeSet<String> {
        &self.authorities
    }

    /// Space-joined authorities, in sorted order.
    pub fn scope(&self) -> String {
        self.authorities
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(" ")
    }
}
