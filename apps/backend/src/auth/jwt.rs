use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, decode_header, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::auth::claims::Claims;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::state::security_config::SecurityConfig;

/// Lifetime of an access token.
pub const TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

const ACCEPTED_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// Mint an access token valid for 24 hours from `now`.
pub fn mint_access_token(
    user_id: i32,
    username: &str,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal(ErrorCode::TokenSigningFailure, "clock before epoch"))?
        .as_secs() as i64;

    let claims = Claims {
        user_id,
        username: username.to_string(),
        iat,
        exp: iat + TOKEN_TTL_SECS,
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| {
        AppError::internal(
            ErrorCode::TokenSigningFailure,
            format!("Failed to encode JWT: {e}"),
        )
    })
}

/// Verify a token and return its claims.
///
/// Only the HMAC family is accepted and expiry is checked with zero leeway.
/// A valid signature over a payload that does not deserialize into
/// [`Claims`] yields `MalformedClaims`; every other failure is
/// `InvalidOrExpiredToken`.
pub fn verify_access_token(token: &str, security: &SecurityConfig) -> Result<Claims, AppError> {
    // header is parsed up front so an unknown `alg` (e.g. "none") is not
    // mistaken for a claims problem
    let header = decode_header(token).map_err(|_| AppError::InvalidOrExpiredToken)?;
    if !ACCEPTED_ALGORITHMS.contains(&header.alg) {
        return Err(AppError::InvalidOrExpiredToken);
    }

    let mut validation = Validation::new(header.alg);
    validation.algorithms = ACCEPTED_ALGORITHMS.to_vec();
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::Json(_) | ErrorKind::MissingRequiredClaim(_) => AppError::MalformedClaims,
        _ => AppError::InvalidOrExpiredToken,
    })
}
