//! Account endpoints: liveness and token issuance

use axum::extract::State;
use tracing::info;

use super::middleware::RequireBasicAuth;
use super::state::AppState;
use super::types::ApiError;

/// Fixed body returned by the health endpoint.
pub const HEALTH_MESSAGE: &str = "Authorization Server is running.";

/// GET /account
///
/// Liveness confirmation. Open to unauthenticated callers; any
/// credentials present are ignored.
pub async fn health() -> &'static str {
    HEALTH_MESSAGE
}

/// POST /account/token
///
/// Issues an RS256-signed JWT for the authenticated caller. The
/// compact token is the entire response body.
pub async fn issue_token(
    State(state): State<AppState>,
    RequireBasicAuth(identity): RequireBasicAuth,
) -> Result<String, ApiError> {
    let token = state.token_issuer.issue(&identity)?;

    info!(subject = %identity.subject(), "issued token");

    Ok(token)
}
