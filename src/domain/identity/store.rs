//! Credential-lookup capability

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::Identity;
use crate::domain::DomainError;

/// Looks up a presented credential pair.
///
/// Returns the matching identity when both username and password match
/// a registered credential, `None` otherwise. Errors are reserved for
/// real failures in the backing store, never for a plain mismatch.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Identity>, DomainError>;
}
