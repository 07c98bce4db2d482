//! Error codes for the blog backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the `code` field of
//! error responses.

use core::fmt;

/// Centralized error codes for the blog backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// Bad username/password pair (never says which half was wrong)
    InvalidCredentials,
    /// Authorization header missing or not `Bearer <token>`
    MissingToken,
    /// Bad signature, disallowed algorithm, malformed or expired token
    InvalidOrExpiredToken,
    /// Token verified but its claims are missing or mistyped
    MalformedClaims,
    /// Authenticated but not the owner of the resource
    Forbidden,

    // Request Validation
    /// General validation error
    ValidationError,
    /// Path id is not a positive integer
    InvalidId,
    /// Body could not be read or parsed as JSON
    BadRequest,

    // Resource Not Found
    PostNotFound,
    /// Generic not found (DB-driven)
    NotFound,

    // Conflicts
    /// Username or email already registered
    Conflict,
    /// Unique constraint violation raced past the pre-check
    UniqueViolation,

    // System Errors
    DbError,
    DbUnavailable,
    HashingFailure,
    TokenSigningFailure,
    Internal,
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::MissingToken => "MISSING_TOKEN",
            Self::InvalidOrExpiredToken => "INVALID_OR_EXPIRED_TOKEN",
            Self::MalformedClaims => "MALFORMED_CLAIMS",
            Self::Forbidden => "FORBIDDEN",

            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidId => "INVALID_ID",
            Self::BadRequest => "BAD_REQUEST",

            Self::PostNotFound => "POST_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::Conflict => "CONFLICT",
            Self::UniqueViolation => "UNIQUE_VIOLATION",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::HashingFailure => "HASHING_FAILURE",
            Self::TokenSigningFailure => "TOKEN_SIGNING_FAILURE",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
