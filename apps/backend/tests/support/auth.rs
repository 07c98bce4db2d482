//! Token helpers for tests.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use backend::auth::jwt::mint_access_token;
use backend::state::security_config::SecurityConfig;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::json;

pub fn mint_test_token(user_id: i32, username: &str, sec: &SecurityConfig) -> String {
    mint_access_token(user_id, username, SystemTime::now(), sec).expect("should mint token")
}

/// Full `Authorization` header value.
pub fn bearer_header(user_id: i32, username: &str, sec: &SecurityConfig) -> String {
    format!("Bearer {}", mint_test_token(user_id, username, sec))
}

/// Token issued 25 hours ago, so already past its 24h expiry.
pub fn mint_expired_token(user_id: i32, username: &str, sec: &SecurityConfig) -> String {
    let past = SystemTime::now() - Duration::from_secs(25 * 60 * 60);
    mint_access_token(user_id, username, past, sec).expect("should mint expired token")
}

/// Unsigned token with `alg: none`.
pub fn unsigned_token(user_id: i32, username: &str) -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock after epoch")
        .as_secs() as i64;
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(
        json!({"user_id": user_id, "username": username, "iat": now, "exp": now + 3600})
            .to_string(),
    );
    format!("{header}.{payload}.")
}
