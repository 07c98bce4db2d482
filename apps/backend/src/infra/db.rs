use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbKind};
use crate::error::AppError;

/// Connect to the database described by `kind`. Does not run migrations.
pub async fn connect_db(kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let url = db_url(kind)?;

    let mut opts = ConnectOptions::new(url);
    opts.sqlx_logging(false)
        .connect_timeout(Duration::from_secs(10));
    if kind == DbKind::SqliteMemory {
        // every pooled connection would otherwise open its own empty database
        opts.max_connections(1).min_connections(1);
    } else {
        opts.max_connections(10);
    }

    let conn = Database::connect(opts).await?;
    Ok(conn)
}

/// Connect and bring the schema up to date.
pub async fn bootstrap_db(kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(kind).await?;
    migrate(&conn, MigrationCommand::Up).await?;
    info!(db_kind = ?kind, "database ready");
    Ok(conn)
}
