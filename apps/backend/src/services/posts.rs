//! Post CRUD. Reads are public; update and delete go through
//! `ownership::authorize_mutation`.

use sea_orm::ConnectionTrait;
use tracing::info;

use crate::auth::claims::AuthenticatedUser;
use crate::error::AppError;
use crate::repos::posts::{self as posts_repo, Post};
use crate::repos::comments as comments_repo;
use crate::services::inputs::PostRequest;
use crate::services::ownership::{authorize_mutation, require_found};
use crate::services::validation::{parse_id, parse_validated, Validate};
use crate::services::views::{CommentView, PostCreatedView, PostDetailView, PostView};

/// Live post by its raw path id; an unparseable id reads as absent.
async fn fetch_post<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    raw_id: &str,
) -> Result<Option<Post>, AppError> {
    match parse_id(raw_id) {
        Some(id) => Ok(posts_repo::find_post_by_id(conn, id).await?),
        None => Ok(None),
    }
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    identity: &AuthenticatedUser,
    input: PostRequest,
) -> Result<PostCreatedView, AppError> {
    input.validate()?;

    let post = posts_repo::insert_post(conn, identity.id, &input.title, &input.content).await?;

    info!(post_id = post.id, user_id = identity.id, "post created");
    Ok(PostCreatedView {
        message: "Post created successfully".to_string(),
        post_id: post.id,
        title: post.title,
    })
}

/// All live posts with their authors, newest first.
pub async fn list<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<Vec<PostView>, AppError> {
    let rows = posts_repo::list_posts(conn).await?;
    Ok(rows
        .into_iter()
        .map(|(post, author)| PostView::new(post, author))
        .collect())
}

pub async fn get<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    raw_id: &str,
) -> Result<PostDetailView, AppError> {
    let row = match parse_id(raw_id) {
        Some(id) => posts_repo::find_post_with_author(conn, id).await?,
        None => None,
    };
    let (post, author) = match row {
        Some((post, author)) => (Some(post), author),
        None => (None, None),
    };
    let post = require_found(post, raw_id)?;

    let comments = comments_repo::list_comments_for_post(conn, post.id)
        .await?
        .into_iter()
        .map(|(comment, author)| CommentView::new(comment, author))
        .collect();

    Ok(PostDetailView {
        post: PostView::new(post, author),
        comments,
    })
}

/// Fetch (404), check owner (403), then parse and validate `body` (400).
/// The body is only looked at once the caller is known to own the post.
pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    identity: &AuthenticatedUser,
    raw_id: &str,
    body: &[u8],
) -> Result<(), AppError> {
    let post = authorize_mutation(identity, fetch_post(conn, raw_id).await?, raw_id)?;

    let input: PostRequest = parse_validated(body)?;

    posts_repo::update_post(conn, post.id, &input.title, &input.content).await?;

    info!(post_id = post.id, user_id = identity.id, "post updated");
    Ok(())
}

/// Fetch (404), check owner (403), then soft delete.
pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    identity: &AuthenticatedUser,
    raw_id: &str,
) -> Result<(), AppError> {
    let post = authorize_mutation(identity, fetch_post(conn, raw_id).await?, raw_id)?;

    posts_repo::soft_delete_post(conn, post.id).await?;

    info!(post_id = post.id, user_id = identity.id, "post deleted");
    Ok(())
}
