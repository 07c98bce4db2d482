use std::env;
use std::str::FromStr;

use crate::error::AppError;

/// Which database backend to connect to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    /// PostgreSQL, credentials from the environment
    Postgres,
    /// SQLite file at `BLOG_SQLITE_PATH`
    SqliteFile,
    /// Private in-memory SQLite; gone when the pool closes
    SqliteMemory,
}

impl FromStr for DbKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(DbKind::Postgres),
            "sqlite-file" | "sqlite" => Ok(DbKind::SqliteFile),
            "sqlite-memory" | "memory" => Ok(DbKind::SqliteMemory),
            other => Err(AppError::config(format!("Unknown database kind '{other}'"))),
        }
    }
}

impl DbKind {
    /// Reads `BLOG_DB_KIND`; defaults to Postgres.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_env_var("BLOG_DB_KIND", DbKind::Postgres)
    }

    /// Reads `BLOG_TEST_DB_KIND`; tests default to in-memory SQLite.
    pub fn from_test_env() -> Result<Self, AppError> {
        Self::from_env_var("BLOG_TEST_DB_KIND", DbKind::SqliteMemory)
    }

    fn from_env_var(name: &str, default: DbKind) -> Result<Self, AppError> {
        match env::var(name) {
            Ok(v) if !v.trim().is_empty() => v.parse(),
            _ => Ok(default),
        }
    }
}

/// Builds a connection URL for `kind` from environment variables.
pub fn db_url(kind: DbKind) -> Result<String, AppError> {
    match kind {
        DbKind::Postgres => {
            let host = env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port = env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
            let db_name = must_var("BLOG_DB")?;
            let username = must_var("BLOG_DB_USER")?;
            let password = must_var("BLOG_DB_PASSWORD")?;
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
        DbKind::SqliteFile => {
            let path = env::var("BLOG_SQLITE_PATH").unwrap_or_else(|_| "blog.sqlite".to_string());
            Ok(format!("sqlite://{path}?mode=rwc"))
        }
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
    }
}

/// Get required environment variable or return error
pub(crate) fn must_var(name: &str) -> Result<String, AppError> {
    match env::var(name) {
        Ok(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::config(format!(
            "Required environment variable '{name}' is not set"
        ))),
    }
}
