//! Route table

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::account;
use super::middleware::{logging_middleware, security_headers_middleware};
use super::state::AppState;

/// Create the application router.
///
/// Route-level auth: both health routes are open; the token route
/// authenticates through the `RequireBasicAuth` extractor. axum does
/// not merge trailing slashes, so `/account/` is registered explicitly.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/account", get(account::health))
        .route("/account/", get(account::health))
        .route("/account/token", post(account::issue_token))
        .with_state(state)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}
