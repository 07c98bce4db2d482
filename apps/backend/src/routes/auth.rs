use std::time::SystemTime;

use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::services::credentials;
use crate::services::inputs::{LoginRequest, RegisterRequest};
use crate::services::views::{MessageView, TokenView};
use crate::state::app_state::AppState;

async fn register(
    app_state: web::Data<AppState>,
    body: ValidatedJson<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;
    credentials::register(db, body.into_inner()).await?;
    Ok(HttpResponse::Created().json(MessageView::new("User registered successfully")))
}

async fn login(
    app_state: web::Data<AppState>,
    body: ValidatedJson<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;
    let token = credentials::login(
        db,
        &app_state.security,
        body.into_inner(),
        SystemTime::now(),
    )
    .await?;
    Ok(HttpResponse::Ok().json(TokenView { token }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/register", web::post().to(register));
    cfg.route("/login", web::post().to(login));
}
