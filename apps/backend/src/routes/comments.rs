use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::extractors::CurrentUser;
use crate::services::comments;
use crate::state::app_state::AppState;

pub(crate) async fn list_comments(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;
    Ok(HttpResponse::Ok().json(comments::list_for_post(db, &path).await?))
}

// Raw body: the post id and the post's existence are checked first.
pub(crate) async fn create_comment(
    app_state: web::Data<AppState>,
    user: CurrentUser,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;
    let created = comments::create(db, &user, &path, &body).await?;
    Ok(HttpResponse::Created().json(created))
}
