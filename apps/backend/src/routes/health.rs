use actix_web::{web, HttpResponse};
use migration::get_latest_migration_version;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct Welcome {
    message: &'static str,
    status: &'static str,
}

async fn welcome() -> HttpResponse {
    HttpResponse::Ok().json(Welcome {
        message: "Welcome to the Blog System Backend!",
        status: "Server is running",
    })
}

/// Outcome of probing the database. `detail` is only set on failure.
#[derive(Debug, Serialize)]
struct DbProbe {
    #[serde(rename = "db")]
    state: &'static str,
    #[serde(rename = "db_error", skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
    migrations: String,
}

impl DbProbe {
    fn failed(detail: String) -> Self {
        Self {
            state: "error",
            detail: Some(detail),
            migrations: "unknown".to_string(),
        }
    }
}

async fn probe(db: &DatabaseConnection) -> DbProbe {
    let ping = Statement::from_string(db.get_database_backend(), "SELECT 1 AS ping");
    if let Err(e) = db.query_one(ping).await {
        return DbProbe::failed(format!("DB query failed: {e}"));
    }

    let migrations = match get_latest_migration_version(db).await {
        Ok(Some(version)) => version,
        Ok(None) => "no_migrations".to_string(),
        Err(_) => "unknown".to_string(),
    };
    DbProbe {
        state: "ok",
        detail: None,
        migrations,
    }
}

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    app_version: &'static str,
    #[serde(flatten)]
    db: DbProbe,
    time: String,
}

/// Always 200 while the process is up; database trouble is reported in
/// the body.
async fn health(app_state: web::Data<AppState>) -> HttpResponse {
    let db = match app_state.db() {
        Some(conn) => probe(conn).await,
        None => DbProbe::failed("DB not configured".to_string()),
    };

    HttpResponse::Ok().json(Health {
        status: "ok",
        app_version: env!("CARGO_PKG_VERSION"),
        db,
        time: OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_else(|_| "unknown".to_string()),
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(welcome))
        .route("/health", web::get().to(health));
}
