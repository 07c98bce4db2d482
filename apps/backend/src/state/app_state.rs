use sea_orm::DatabaseConnection;

use super::security_config::SecurityConfig;
use crate::error::AppError;
use crate::errors::ErrorCode;

/// Shared resources handed to every handler through `web::Data`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (absent in tests that only exercise auth)
    db: Option<DatabaseConnection>,
    pub security: SecurityConfig,
}

impl AppState {
    pub fn new(db: DatabaseConnection, security: SecurityConfig) -> Self {
        Self {
            db: Some(db),
            security,
        }
    }

    pub fn without_db(security: SecurityConfig) -> Self {
        Self { db: None, security }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    /// Connection or a 500 when the state was built without one.
    pub fn require_db(&self) -> Result<&DatabaseConnection, AppError> {
        self.db
            .as_ref()
            .ok_or_else(|| AppError::internal(ErrorCode::DbUnavailable, "database not configured"))
    }
}
