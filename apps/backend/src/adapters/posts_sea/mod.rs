//! SeaORM adapter for posts. Soft-deleted rows are filtered everywhere.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::{posts, users};

pub mod dto;

pub use dto::{PostCreate, PostUpdate};

fn live() -> sea_orm::Select<posts::Entity> {
    posts::Entity::find().filter(posts::Column::DeletedAt.is_null())
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<Option<posts::Model>, sea_orm::DbErr> {
    live().filter(posts::Column::Id.eq(id)).one(conn).await
}

pub async fn find_with_author<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<Option<(posts::Model, Option<users::Model>)>, sea_orm::DbErr> {
    live()
        .filter(posts::Column::Id.eq(id))
        .find_also_related(users::Entity)
        .one(conn)
        .await
}

/// Newest first; ties broken by id so the order is stable.
pub async fn list_with_authors<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<(posts::Model, Option<users::Model>)>, sea_orm::DbErr> {
    live()
        .order_by_desc(posts::Column::CreatedAt)
        .order_by_desc(posts::Column::Id)
        .find_also_related(users::Entity)
        .all(conn)
        .await
}

pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PostCreate,
) -> Result<posts::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let active = posts::ActiveModel {
        id: NotSet,
        title: Set(dto.title),
        content: Set(dto.content),
        user_id: Set(dto.user_id),
        created_at: Set(now),
        updated_at: Set(now),
        deleted_at: Set(None),
    };

    active.insert(conn).await
}

/// Rewrites title and content only; the owner column is never touched.
pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PostUpdate,
) -> Result<posts::Model, sea_orm::DbErr> {
    let active = posts::ActiveModel {
        id: Set(dto.id),
        title: Set(dto.title),
        content: Set(dto.content),
        updated_at: Set(time::OffsetDateTime::now_utc()),
        ..Default::default()
    };

    active.update(conn).await
}

pub async fn soft_delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<(), sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let active = posts::ActiveModel {
        id: Set(id),
        deleted_at: Set(Some(now)),
        updated_at: Set(now),
        ..Default::default()
    };

    active.update(conn).await?;
    Ok(())
}
