//! Account API
//!
//! A minimal authorization server: one registered credential, HTTP
//! Basic authentication, RS256-signed JWTs carrying subject and scope
//! claims, and a liveness endpoint.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::auth::TokenIssuer;
use infrastructure::credentials::{RegisteredCredential, StaticCredentialStore};

/// Build the shared application state from configuration.
///
/// Fails when the RSA key material is missing or malformed; the server
/// must not accept traffic without a usable signing key.
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let token_issuer = TokenIssuer::from_pem(&config.auth.private_key, &config.auth.public_key)?;

    let credential_store = StaticCredentialStore::new(RegisteredCredential {
        username: config.auth.client.username.clone(),
        password: config.auth.client.password.clone(),
        authorities: config.auth.client.authorities.clone(),
    });

    Ok(AppState::new(Arc::new(credential_store), Arc::new(token_issuer)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_requires_key_material() {
        let config = AppConfig::default();

        let result = create_app_state(&config);
        assert!(result.is_err());
    }
}
