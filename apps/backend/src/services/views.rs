//! Response bodies. None of these carry a password hash.

use serde::Serialize;
use time::OffsetDateTime;

use crate::repos::comments::Comment;
use crate::repos::posts::Post;
use crate::repos::users::User;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AuthorView {
    pub id: i32,
    pub username: String,
}

impl AuthorView {
    /// Falls back to an id-only author when the user row is gone.
    fn from_parts(user_id: i32, author: Option<User>) -> Self {
        match author {
            Some(user) => Self {
                id: user.id,
                username: user.username,
            },
            None => Self {
                id: user_id,
                username: String::new(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentView {
    pub id: i32,
    pub content: String,
    pub post_id: i32,
    pub user_id: i32,
    pub user: AuthorView,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl CommentView {
    pub fn new(comment: Comment, author: Option<User>) -> Self {
        Self {
            user: AuthorView::from_parts(comment.user_id, author),
            id: comment.id,
            content: comment.content,
            post_id: comment.post_id,
            user_id: comment.user_id,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PostView {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub user_id: i32,
    pub author: AuthorView,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl PostView {
    pub fn new(post: Post, author: Option<User>) -> Self {
        Self {
            author: AuthorView::from_parts(post.user_id, author),
            id: post.id,
            title: post.title,
            content: post.content,
            user_id: post.user_id,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Single post with its comments, oldest comment first.
#[derive(Debug, Clone, Serialize)]
pub struct PostDetailView {
    #[serde(flatten)]
    pub post: PostView,
    pub comments: Vec<CommentView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageView {
    pub message: String,
}

impl MessageView {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PostCreatedView {
    pub message: String,
    pub post_id: i32,
    pub title: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentCreatedView {
    pub message: String,
    pub comment_id: i32,
    pub post_id: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct TokenView {
    pub token: String,
}
