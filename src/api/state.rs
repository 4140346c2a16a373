//! Shared application state

use std::sync::Arc;

use crate::domain::CredentialStore;
use crate::infrastructure::auth::TokenIssuer;

/// State shared by all request handlers.
///
/// Both members are read-only after startup, so concurrent requests
/// share them without coordination.
#[derive(Clone)]
pub struct AppState {
    pub credential_store: Arc<dyn CredentialStore>,
    pub token_issuer: Arc<TokenIssuer>,
}

impl AppState {
    pub fn new(credential_store: Arc<dyn CredentialStore>, token_issuer: Arc<TokenIssuer>) -> Self {
        Self {
            credential_store,
            token_issuer,
        }
    }
}
