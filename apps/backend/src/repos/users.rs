//! Credential records (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;

use crate::adapters::users_sea as users_adapter;
use crate::entities::users;
use crate::errors::domain::DomainError;

/// Stored credential record. `password_hash` never leaves the service layer.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            email: model.email,
            password_hash: model.password_hash,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

pub async fn find_by_username_or_email<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
    email: &str,
) -> Result<Option<User>, DomainError> {
    let user = users_adapter::find_by_username_or_email(conn, username, email).await?;
    Ok(user.map(User::from))
}

pub async fn find_by_username<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
) -> Result<Option<User>, DomainError> {
    let user = users_adapter::find_by_username(conn, username).await?;
    Ok(user.map(User::from))
}

pub async fn insert_credential<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
    email: &str,
    password_hash: &str,
) -> Result<User, DomainError> {
    let dto = users_adapter::CredentialCreate::new(username, email, password_hash);
    let user = users_adapter::insert_credential(conn, dto).await?;
    Ok(User::from(user))
}
