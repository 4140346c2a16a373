//! HTTP Basic authentication extractor

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use base64::{engine::general_purpose::STANDARD, Engine};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::{DomainError, Identity};

/// Extractor that authenticates the request via `Authorization: Basic`.
///
/// Routes that take this extractor reject unauthenticated requests
/// with 401 and a `WWW-Authenticate: Basic` challenge; routes that do
/// not take it are open.
#[derive(Debug, Clone)]
pub struct RequireBasicAuth(pub Identity);

impl FromRequestParts<AppState> for RequireBasicAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let (username, password) = extract_basic_credentials(&parts.headers)?;

        debug!(username = %username, "authenticating basic credentials");

        let identity = state
            .credential_store
            .authenticate(&username, &password)
            .await?
            .ok_or_else(|| DomainError::unauthenticated("Invalid username or password"))?;

        Ok(RequireBasicAuth(identity))
    }
}

/// Split the `Authorization: Basic` header into username and password.
pub fn extract_basic_credentials(
    headers: &axum::http::HeaderMap,
) -> Result<(String, String), ApiError> {
    let Some(auth_header) = headers.get(header::AUTHORIZATION) else {
        return Err(ApiError::unauthorized_basic(
            "Authentication required. Provide credentials via 'Authorization: Basic <base64>'",
        ));
    };

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::bad_request("Invalid Authorization header encoding"))?;

    let Some(encoded) = auth_str.strip_prefix("Basic ") else {
        return Err(ApiError::unauthorized_basic("Unsupported authorization scheme"));
    };

    let decoded = STANDARD
        .decode(encoded.trim())
        .map_err(|_| ApiError::bad_request("Invalid base64 in Authorization header"))?;

    let decoded = String::from_utf8(decoded)
        .map_err(|_| ApiError::bad_request("Credentials are not valid UTF-8"))?;

    let Some((username, password)) = decoded.split_once(':') else {
        return Err(ApiError::bad_request("Malformed basic credentials"));
    };

    Ok((username.to_string(), password.to_string()))
}
