use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::extractors::{CurrentUser, ValidatedJson};
use crate::middleware::JwtExtract;
use crate::routes::comments;
use crate::services::inputs::PostRequest;
use crate::services::posts;
use crate::services::views::MessageView;
use crate::state::app_state::AppState;

async fn list_posts(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;
    Ok(HttpResponse::Ok().json(posts::list(db).await?))
}

async fn get_post(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;
    Ok(HttpResponse::Ok().json(posts::get(db, &path).await?))
}

async fn create_post(
    app_state: web::Data<AppState>,
    user: CurrentUser,
    body: ValidatedJson<PostRequest>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;
    let created = posts::create(db, &user, body.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

// Body is taken raw: it is only parsed after the ownership check.
async fn update_post(
    app_state: web::Data<AppState>,
    user: CurrentUser,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;
    posts::update(db, &user, &path, &body).await?;
    Ok(HttpResponse::Ok().json(MessageView::new("Post updated successfully")))
}

async fn delete_post(
    app_state: web::Data<AppState>,
    user: CurrentUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;
    posts::delete(db, &user, &path).await?;
    Ok(HttpResponse::Ok().json(MessageView::new("Post deleted successfully")))
}

/// Mounted under `/api/v1/posts`. Reads are public; every mutating route
/// is wrapped in `JwtExtract`.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_posts))
            .route(web::post().to(create_post).wrap(JwtExtract)),
    )
    .service(
        web::resource("/{id}")
            .route(web::get().to(get_post))
            .route(web::put().to(update_post).wrap(JwtExtract))
            .route(web::delete().to(delete_post).wrap(JwtExtract)),
    )
    .service(
        web::resource("/{id}/comments")
            .route(web::get().to(comments::list_comments))
            .route(web::post().to(comments::create_comment).wrap(JwtExtract)),
    );
}
