//! Comments (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;

use crate::adapters::comments_sea as comments_adapter;
use crate::entities::comments;
use crate::errors::domain::DomainError;
use crate::repos::users::User;

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub content: String,
    pub user_id: i32,
    pub post_id: i32,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

impl From<comments::Model> for Comment {
    fn from(model: comments::Model) -> Self {
        Self {
            id: model.id,
            content: model.content,
            user_id: model.user_id,
            post_id: model.post_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

pub async fn insert_comment<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post_id: i32,
    user_id: i32,
    content: &str,
) -> Result<Comment, DomainError> {
    let dto = comments_adapter::CommentCreate {
        post_id,
        user_id,
        content: content.to_string(),
    };
    let comment = comments_adapter::insert(conn, dto).await?;
    Ok(Comment::from(comment))
}

pub async fn list_comments_for_post<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post_id: i32,
) -> Result<Vec<(Comment, Option<User>)>, DomainError> {
    let rows = comments_adapter::list_for_post_with_authors(conn, post_id).await?;
    Ok(rows
        .into_iter()
        .map(|(comment, author)| (Comment::from(comment), author.map(User::from)))
        .collect())
}
