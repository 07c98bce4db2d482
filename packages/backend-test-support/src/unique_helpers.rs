//! Test helpers for generating unique test data
//!
//! Usernames are capped at 50 characters by the schema, so the ULID suffix
//! is trimmed to keep prefixed names well under that limit.

use ulid::Ulid;

fn short_ulid() -> String {
    let ulid = Ulid::new().to_string().to_lowercase();
    // Last 16 chars are random bits; the leading timestamp part collides within a millisecond.
    ulid[ulid.len() - 16..].to_string()
}

/// Generate a unique username with the given prefix
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_username;
///
/// let a = unique_username("alice");
/// let b = unique_username("alice");
/// assert_ne!(a, b);
/// assert!(a.starts_with("alice_"));
/// ```
pub fn unique_username(prefix: &str) -> String {
    format!("{}_{}", prefix, short_ulid())
}

/// Generate a unique email address with the given prefix
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_email;
///
/// let email = unique_email("alice");
/// assert!(email.starts_with("alice-"));
/// assert!(email.ends_with("@example.test"));
/// ```
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.test", prefix, short_ulid())
}
