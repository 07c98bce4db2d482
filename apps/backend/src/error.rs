use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::errors::ErrorCode;
use crate::infra::db_errors::map_db_err;
use crate::trace_ctx;

/// JSON body written for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
    pub status: u16,
    pub trace_id: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Bad request: {detail}")]
    BadRequest { code: ErrorCode, detail: String },
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Authorization token required")]
    MissingToken,
    #[error("Invalid or expired token")]
    InvalidOrExpiredToken,
    #[error("Token claims invalid")]
    MalformedClaims,
    #[error("Forbidden: {detail}")]
    Forbidden { detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: ErrorCode, detail: String },
    #[error("Internal error: {detail}")]
    Internal { code: ErrorCode, detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. } => *code,
            AppError::BadRequest { code, .. } => *code,
            AppError::InvalidCredentials => ErrorCode::InvalidCredentials,
            AppError::MissingToken => ErrorCode::MissingToken,
            AppError::InvalidOrExpiredToken => ErrorCode::InvalidOrExpiredToken,
            AppError::MalformedClaims => ErrorCode::MalformedClaims,
            AppError::Forbidden { .. } => ErrorCode::Forbidden,
            AppError::NotFound { code, .. } => *code,
            AppError::Conflict { code, .. } => *code,
            AppError::Internal { code, .. } => *code,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    /// Message exposed to clients. Server-side failures get a generic
    /// message; their detail only goes to the log.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation { detail, .. }
            | AppError::BadRequest { detail, .. }
            | AppError::Forbidden { detail }
            | AppError::NotFound { detail, .. }
            | AppError::Conflict { detail, .. } => detail.clone(),
            AppError::InvalidCredentials
            | AppError::MissingToken
            | AppError::InvalidOrExpiredToken
            | AppError::MalformedClaims => self.to_string(),
            AppError::Internal { code, .. } => match code {
                ErrorCode::HashingFailure => {
                    "Internal server error during password hashing".to_string()
                }
                ErrorCode::TokenSigningFailure => {
                    "Failed to generate authentication token".to_string()
                }
                ErrorCode::DbError | ErrorCode::DbUnavailable => {
                    "Database error while processing request".to_string()
                }
                _ => "Internal server error".to_string(),
            },
            AppError::Config { .. } => "Internal server error".to_string(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials
            | AppError::MissingToken
            | AppError::InvalidOrExpiredToken
            | AppError::MalformedClaims => StatusCode::UNAUTHORIZED,
            AppError::Forbidden { .. } => StatusCode::FORBIDDEN,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } | AppError::Config { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn invalid(detail: impl Into<String>) -> Self {
        Self::Validation {
            code: ErrorCode::ValidationError,
            detail: detail.into(),
        }
    }

    pub fn bad_request(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            detail: detail.into(),
        }
    }

    pub fn forbidden(detail: impl Into<String>) -> Self {
        Self::Forbidden {
            detail: detail.into(),
        }
    }

    pub fn not_found(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            detail: detail.into(),
        }
    }

    pub fn conflict(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Conflict {
            code,
            detail: detail.into(),
        }
    }

    pub fn internal(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Internal {
            code,
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(detail) => AppError::invalid(detail),
            DomainError::Conflict(ConflictKind::UniqueUsername, _)
            | DomainError::Conflict(ConflictKind::UniqueEmail, _) => AppError::conflict(
                ErrorCode::Conflict,
                "Username or email already exists",
            ),
            DomainError::Conflict(_, detail) => {
                AppError::conflict(ErrorCode::UniqueViolation, detail)
            }
            DomainError::NotFound(kind, detail) => {
                let code = match kind {
                    NotFoundKind::Post => ErrorCode::PostNotFound,
                    _ => ErrorCode::NotFound,
                };
                AppError::not_found(code, detail)
            }
            DomainError::Infra(InfraErrorKind::DbUnavailable, detail) => {
                AppError::internal(ErrorCode::DbUnavailable, detail)
            }
            DomainError::Infra(_, detail) => AppError::internal(ErrorCode::DbError, detail),
        }
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        AppError::from(map_db_err(e))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let code = self.code();
        let trace_id = trace_ctx::trace_id();

        if status.is_server_error() {
            error!(trace_id = %trace_id, code = %code, error = %self, "request failed");
        }

        let body = ErrorBody {
            error: self.public_message(),
            code: code.as_str().to_string(),
            status: status.as_u16(),
            trace_id: trace_id.clone(),
        };

        HttpResponse::build(status)
            .insert_header(("x-trace-id", trace_id))
            .json(body)
    }
}
