//! Request bodies accepted by the API.

use serde::Deserialize;

use crate::error::AppError;
use crate::services::validation::{
    require_email, require_max_chars, require_non_blank, require_present, Validate,
};

pub const USERNAME_MAX_CHARS: usize = 50;
pub const EMAIL_MAX_CHARS: usize = 100;
pub const TITLE_MAX_CHARS: usize = 255;

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
}

impl Validate for RegisterRequest {
    fn validate(&self) -> Result<(), AppError> {
        require_non_blank("username", &self.username)?;
        require_present("password", &self.password)?;
        require_non_blank("email", &self.email)?;
        require_max_chars("username", &self.username, USERNAME_MAX_CHARS)?;
        require_max_chars("email", &self.email, EMAIL_MAX_CHARS)?;
        require_email(&self.email)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl Validate for LoginRequest {
    fn validate(&self) -> Result<(), AppError> {
        require_non_blank("username", &self.username)?;
        require_present("password", &self.password)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostRequest {
    pub title: String,
    pub content: String,
}

impl Validate for PostRequest {
    fn validate(&self) -> Result<(), AppError> {
        require_non_blank("title", &self.title)?;
        require_non_blank("content", &self.content)?;
        require_max_chars("title", &self.title, TITLE_MAX_CHARS)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentRequest {
    pub content: String,
}

impl Validate for CommentRequest {
    fn validate(&self) -> Result<(), AppError> {
        require_non_blank("content", &self.content)
    }
}
