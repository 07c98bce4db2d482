//! Comments. Any authenticated user may comment on a live post.

use sea_orm::ConnectionTrait;
use tracing::info;

use crate::auth::claims::AuthenticatedUser;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::comments as comments_repo;
use crate::repos::posts as posts_repo;
use crate::services::inputs::CommentRequest;
use crate::services::ownership::require_found;
use crate::services::validation::{parse_id, parse_validated};
use crate::services::views::{CommentCreatedView, CommentView};

fn require_post_id(raw: &str) -> Result<i32, AppError> {
    parse_id(raw).ok_or_else(|| AppError::bad_request(ErrorCode::InvalidId, "Invalid post ID format"))
}

/// Id format (400), post exists (404), then body (400).
pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    identity: &AuthenticatedUser,
    raw_post_id: &str,
    body: &[u8],
) -> Result<CommentCreatedView, AppError> {
    let post_id = require_post_id(raw_post_id)?;
    let post = require_found(posts_repo::find_post_by_id(conn, post_id).await?, post_id)?;

    let input: CommentRequest = parse_validated(body)?;

    let comment = comments_repo::insert_comment(conn, post.id, identity.id, &input.content).await?;

    info!(
        comment_id = comment.id,
        post_id = post.id,
        user_id = identity.id,
        "comment created"
    );
    Ok(CommentCreatedView {
        message: "Comment created successfully".to_string(),
        comment_id: comment.id,
        post_id: post.id,
    })
}

/// Comments on a post, oldest first. Unknown posts yield an empty list.
pub async fn list_for_post<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    raw_post_id: &str,
) -> Result<Vec<CommentView>, AppError> {
    let post_id = require_post_id(raw_post_id)?;
    let rows = comments_repo::list_comments_for_post(conn, post_id).await?;
    Ok(rows
        .into_iter()
        .map(|(comment, author)| CommentView::new(comment, author))
        .collect())
}
