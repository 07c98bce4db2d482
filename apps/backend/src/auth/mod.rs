//! Credential hashing and session tokens.

pub mod claims;
pub mod jwt;
pub mod password;

pub use claims::{AuthenticatedUser, Claims};
