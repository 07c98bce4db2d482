//! SeaORM adapter for credential records.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, Condition, EntityTrait, NotSet, QueryFilter,
    Set,
};

use crate::entities::users;

pub mod dto;

pub use dto::CredentialCreate;

// Adapter functions return DbErr; the repos layer maps to DomainError.

pub async fn find_by_username_or_email<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
    email: &str,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find()
        .filter(
            Condition::any()
                .add(users::Column::Username.eq(username))
                .add(users::Column::Email.eq(email)),
        )
        .one(conn)
        .await
}

pub async fn find_by_username<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find()
        .filter(users::Column::Username.eq(username))
        .one(conn)
        .await
}

pub async fn insert_credential<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: CredentialCreate,
) -> Result<users::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let active = users::ActiveModel {
        id: NotSet,
        username: Set(dto.username),
        email: Set(dto.email),
        password_hash: Set(dto.password_hash),
        created_at: Set(now),
        updated_at: Set(now),
    };

    active.insert(conn).await
}
