//! Logging helpers: PII redaction and security events.

pub mod pii;
pub mod security;
