//! Post existence and ownership checks gating mutation.
//!
//! A mutation passes through `Unauthenticated -> TokenValidated ->
//! ResourceFetched -> OwnershipConfirmed -> Applied`. Token validation is
//! the JWT middleware's job; this module covers the two middle steps, in
//! that order, so a missing post is 404 whoever asks.

use std::fmt::Display;

use crate::auth::claims::AuthenticatedUser;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::logging::security;
use crate::repos::posts::Post;

/// 404 when the lookup came back empty. `id` is echoed as requested.
pub fn require_found(post: Option<Post>, id: impl Display) -> Result<Post, AppError> {
    post.ok_or_else(|| {
        AppError::not_found(
            ErrorCode::PostNotFound,
            format!("Post not found with ID: {id}"),
        )
    })
}

/// 403 unless `identity` wrote `post`.
pub fn require_owner(identity: &AuthenticatedUser, post: &Post) -> Result<(), AppError> {
    if post.user_id == identity.id {
        return Ok(());
    }

    security::ownership_denied("post", post.id, post.user_id, identity.id);
    Err(AppError::forbidden(
        "Permission denied: You are not the author of this post",
    ))
}

/// Existence first, then ownership.
pub fn authorize_mutation(
    identity: &AuthenticatedUser,
    post: Option<Post>,
    id: impl Display,
) -> Result<Post, AppError> {
    let post = require_found(post, id)?;
    require_owner(identity, &post)?;
    Ok(post)
}
