use actix_web::http::StatusCode;
use actix_web::test;
use backend::infra::state::build_state;

use crate::common::read_json;
use crate::support::{build_test_state, create_test_app, test_security};

#[actix_web::test]
async fn test_welcome() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/").to_request();
    let body = read_json(test::call_service(&app, req).await, StatusCode::OK).await;

    assert_eq!(body["message"], "Welcome to the Blog System Backend!");
    assert_eq!(body["status"], "Server is running");
    Ok(())
}

#[actix_web::test]
async fn test_health_with_db() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body = read_json(test::call_service(&app, req).await, StatusCode::OK).await;

    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "ok");
    assert!(body.get("db_error").is_none());
    assert_ne!(body["migrations"], "no_migrations");
    assert!(body["app_version"].is_string());
    Ok(())
}

#[actix_web::test]
async fn test_health_without_db() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state(test_security()).build().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body = read_json(test::call_service(&app, req).await, StatusCode::OK).await;

    assert_eq!(body["db"], "error");
    assert_eq!(body["db_error"], "DB not configured");
    Ok(())
}
