//! Posts (generic over ConnectionTrait). Soft-deleted posts read as absent.

use sea_orm::ConnectionTrait;

use crate::adapters::posts_sea as posts_adapter;
use crate::entities::{posts, users};
use crate::errors::domain::DomainError;
use crate::repos::users::User;

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub user_id: i32,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

impl From<posts::Model> for Post {
    fn from(model: posts::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            user_id: model.user_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

fn with_author((post, author): (posts::Model, Option<users::Model>)) -> (Post, Option<User>) {
    (Post::from(post), author.map(User::from))
}

pub async fn find_post_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<Option<Post>, DomainError> {
    let post = posts_adapter::find_by_id(conn, id).await?;
    Ok(post.map(Post::from))
}

pub async fn find_post_with_author<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<Option<(Post, Option<User>)>, DomainError> {
    let row = posts_adapter::find_with_author(conn, id).await?;
    Ok(row.map(with_author))
}

pub async fn list_posts<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<(Post, Option<User>)>, DomainError> {
    let rows = posts_adapter::list_with_authors(conn).await?;
    Ok(rows.into_iter().map(with_author).collect())
}

pub async fn insert_post<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i32,
    title: &str,
    content: &str,
) -> Result<Post, DomainError> {
    let dto = posts_adapter::PostCreate {
        user_id,
        title: title.to_string(),
        content: content.to_string(),
    };
    let post = posts_adapter::insert(conn, dto).await?;
    Ok(Post::from(post))
}

pub async fn update_post<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
    title: &str,
    content: &str,
) -> Result<Post, DomainError> {
    let dto = posts_adapter::PostUpdate {
        id,
        title: title.to_string(),
        content: content.to_string(),
    };
    let post = posts_adapter::update(conn, dto).await?;
    Ok(Post::from(post))
}

pub async fn soft_delete_post<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<(), DomainError> {
    posts_adapter::soft_delete(conn, id).await?;
    Ok(())
}
