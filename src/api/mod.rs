//! API layer - HTTP endpoints and middleware

pub mod account;
pub mod middleware;
pub mod router;
pub mod state;
pub mod types;

pub use middleware::RequireBasicAuth;
pub use router::create_router;
pub use state::AppState;
