//! HTTP middleware and extractors

pub mod basic_auth;
pub mod logging;
pub mod security;

pub use basic_auth::RequireBasicAuth;
pub use logging::logging_middleware;
pub use security::security_headers_middleware;
