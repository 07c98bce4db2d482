//! Registration and login.

use std::time::SystemTime;

use sea_orm::ConnectionTrait;
use tracing::info;

use crate::auth::jwt::mint_access_token;
use crate::auth::password::{hash_password_blocking, verify_password_blocking};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;
use crate::logging::security;
use crate::repos::users::{self, User};
use crate::services::inputs::{LoginRequest, RegisterRequest};
use crate::services::validation::Validate;
use crate::state::security_config::SecurityConfig;

/// Create a credential record. Username and email must both be unused.
pub async fn register<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    input: RegisterRequest,
) -> Result<User, AppError> {
    input.validate()?;

    if users::find_by_username_or_email(conn, &input.username, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::conflict(
            ErrorCode::Conflict,
            "Username or email already exists",
        ));
    }

    let RegisterRequest {
        username,
        password,
        email,
    } = input;

    let password_hash = hash_password_blocking(password).await?;

    // the unique indexes still catch a concurrent registration
    let user = users::insert_credential(conn, &username, &email, &password_hash).await?;

    info!(
        user_id = user.id,
        username = %user.username,
        email = %Redacted(&user.email),
        "user registered"
    );
    Ok(user)
}

/// Check credentials and mint a 24h token. Unknown usernames and wrong
/// passwords are indistinguishable to the caller.
pub async fn login<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    security_config: &SecurityConfig,
    input: LoginRequest,
    now: SystemTime,
) -> Result<String, AppError> {
    input.validate()?;

    let Some(user) = users::find_by_username(conn, &input.username).await? else {
        security::login_failed("unknown_username", &input.username);
        return Err(AppError::InvalidCredentials);
    };

    let matches = verify_password_blocking(input.password, user.password_hash.clone()).await?;
    if !matches {
        security::login_failed("password_mismatch", &input.username);
        return Err(AppError::InvalidCredentials);
    }

    let token = mint_access_token(user.id, &user.username, now, security_config)?;
    info!(user_id = user.id, username = %user.username, "user logged in");
    Ok(token)
}
