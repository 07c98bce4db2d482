use crate::config::db::DbKind;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

/// Builder for `AppState`, shared by `main` and the tests.
pub struct StateBuilder {
    security_config: SecurityConfig,
    db_kind: Option<DbKind>,
}

impl StateBuilder {
    pub fn new(security_config: SecurityConfig) -> Self {
        Self {
            security_config,
            db_kind: None,
        }
    }

    pub fn with_db(mut self, kind: DbKind) -> Self {
        self.db_kind = Some(kind);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        match self.db_kind {
            // single entrypoint: connect + migrate
            Some(kind) => {
                let conn = bootstrap_db(kind).await?;
                Ok(AppState::new(conn, self.security_config))
            }
            None => Ok(AppState::without_db(self.security_config)),
        }
    }
}

pub fn build_state(security_config: SecurityConfig) -> StateBuilder {
    StateBuilder::new(security_config)
}
