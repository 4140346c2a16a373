//! Static credential store backing the credential gate

use async_trait::async_trait;
use tracing::debug;

use crate::domain::{CredentialStore, DomainError, Identity};

/// The single registered username/password/authorities record.
///
/// The password is held in plaintext for parity with the deployment
/// this server replaces. Put a hashed store behind `CredentialStore`
/// before exposing this beyond a lab network.
#[derive(Debug, Clone)]
pub struct RegisteredCredential {
    pub username: String,
    pub password: String,
    pub authorities: Vec<String>,
}

/// In-memory store holding exactly one registered credential.
///
/// Read-only after startup; concurrent requests share it without
/// coordination.
#[derive(Debug)]
pub struct StaticCredentialStore {
    credential: RegisteredCredential,
}

impl StaticCredentialStore {
    pub fn new(credential: RegisteredCredential) -> Self {
        Self { credential }
    }
}

#[async_trait]
impl CredentialStore for StaticCredentialStore {
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Identity>, DomainError> {
        if username != self.credential.username || password != self.credential.password {
            debug!(username, "credential mismatch");
            return Ok(None);
        }

        let identity = Identity::new(
            &self.credential.username,
            self.credential.authorities.iter().cloned(),
        )?;

        Ok(Some(identity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> StaticCredentialStore {
        StaticCredentialStore::new(RegisteredCredential {
            username: "client".to_string(),
            password: "DoNotTell".to_string(),
            authorities: vec!["read".to_string()],
        })
    }

    #[tokio::test]
    async fn test_valid_credentials() {
        let identity = store()
            .authenticate("client", "DoNotTell")
            .await
            .unwrap()
            .expect("credentials should match");

        assert_eq!(identity.subject(), "client");
        assert_eq!(identity.scope(), "read");
    }

    #[tokio::test]
    async fn test_wrong_password() {
        let result = store().authenticate("client", "guess").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_unknown_username() {
        let result = store().authenticate("admin", "DoNotTell").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_authorities_carried_into_identity() {
        let store = StaticCredentialStore::new(RegisteredCredential {
            username: "client".to_string(),
            password: "DoNotTell".to_string(),
            authorities: vec!["write".to_string(), "read".to_string()],
        });

        let identity = store
            .authenticate("client", "DoNotTell")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(identity.scope(), "read write");
    }
}
