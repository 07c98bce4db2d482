//! SeaORM adapter for comments.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::{comments, users};

/// Insert payload for a comment.
#[derive(Debug, Clone)]
pub struct CommentCreate {
    pub post_id: i32,
    pub user_id: i32,
    pub content: String,
}

pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: CommentCreate,
) -> Result<comments::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let active = comments::ActiveModel {
        id: NotSet,
        content: Set(dto.content),
        user_id: Set(dto.user_id),
        post_id: Set(dto.post_id),
        created_at: Set(now),
        updated_at: Set(now),
    };

    active.insert(conn).await
}

/// Oldest first.
pub async fn list_for_post_with_authors<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post_id: i32,
) -> Result<Vec<(comments::Model, Option<users::Model>)>, sea_orm::DbErr> {
    comments::Entity::find()
        .filter(comments::Column::PostId.eq(post_id))
        .order_by_asc(comments::Column::CreatedAt)
        .order_by_asc(comments::Column::Id)
        .find_also_related(users::Entity)
        .all(conn)
        .await
}
