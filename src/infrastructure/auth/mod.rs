//! Token issuance infrastructure

mod jwt;

pub use jwt::{Claims, TokenIssuer};
