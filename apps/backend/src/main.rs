use actix_web::{web, App, HttpServer};
use backend::config::db::DbKind;
use backend::config::server::ServerConfig;
use backend::infra::state::build_state;
use backend::middleware::{cors_middleware, RequestTrace, StructuredLogger, TraceSpan};
use backend::routes;
use backend::state::security_config::SecurityConfig;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker env_file, or `set -a; . ./.env; set +a` locally).
    let server_config = match ServerConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "invalid server configuration");
            std::process::exit(1);
        }
    };

    let db_kind = match DbKind::from_env() {
        Ok(kind) => kind,
        Err(e) => {
            error!(error = %e, "invalid database configuration");
            std::process::exit(1);
        }
    };

    let security_config = SecurityConfig::new(server_config.jwt_secret.as_bytes());

    // connect + migrate before accepting traffic
    let app_state = match build_state(security_config)
        .with_db(db_kind)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };

    info!(
        host = %server_config.host,
        port = server_config.port,
        db_kind = ?db_kind,
        "starting blog backend"
    );

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((server_config.host.as_str(), server_config.port))?
    .run()
    .await
}
