use actix_web::http::StatusCode;
use actix_web::{test, web, HttpResponse};
use backend::state::security_config::SecurityConfig;
use backend::{CurrentUser, JwtExtract};
use serde_json::json;

use crate::common::{assert_error_response, read_json};
use crate::support::auth::{bearer_header, mint_expired_token, mint_test_token, unsigned_token};
use crate::support::{build_test_state, create_test_app, test_security};

async fn whoami(user: CurrentUser) -> HttpResponse {
    HttpResponse::Ok().json(json!({"id": user.id, "username": user.username}))
}

fn probe_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/probe", web::get().to(whoami).wrap(JwtExtract));
}

#[actix_web::test]
async fn test_valid_token_reaches_handler() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_routes(probe_routes).build().await;

    let req = test::TestRequest::get()
        .uri("/probe")
        .insert_header(("Authorization", bearer_header(7, "alice", &test_security())))
        .to_request();
    let body = read_json(test::call_service(&app, req).await, StatusCode::OK).await;

    assert_eq!(body["id"], 7);
    assert_eq!(body["username"], "alice");
    Ok(())
}

#[actix_web::test]
async fn test_missing_or_malformed_header() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_routes(probe_routes).build().await;
    let token = mint_test_token(1, "alice", &test_security());

    let no_header = test::TestRequest::get().uri("/probe").to_request();
    let err = assert_error_response(
        test::call_service(&app, no_header).await,
        StatusCode::UNAUTHORIZED,
        "MISSING_TOKEN",
    )
    .await;
    assert_eq!(err.error, "Authorization token required");

    for value in [
        token.clone(),
        format!("bearer {token}"),
        format!("Basic {token}"),
        "Bearer ".to_string(),
        format!("Bearer  {token}"),
    ] {
        let req = test::TestRequest::get()
            .uri("/probe")
            .insert_header(("Authorization", value))
            .to_request();
        assert_error_response(
            test::call_service(&app, req).await,
            StatusCode::UNAUTHORIZED,
            "MISSING_TOKEN",
        )
        .await;
    }
    Ok(())
}

#[actix_web::test]
async fn test_rejected_tokens() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_routes(probe_routes).build().await;
    let other_secret = SecurityConfig::new("a completely different secret".as_bytes());

    for token in [
        mint_expired_token(1, "alice", &test_security()),
        mint_test_token(1, "alice", &other_secret),
        unsigned_token(1, "alice"),
        "not.a.jwt".to_string(),
    ] {
        let req = test::TestRequest::get()
            .uri("/probe")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_request();
        let err = assert_error_response(
            test::call_service(&app, req).await,
            StatusCode::UNAUTHORIZED,
            "INVALID_OR_EXPIRED_TOKEN",
        )
        .await;
        assert_eq!(err.error, "Invalid or expired token");
    }
    Ok(())
}

#[actix_web::test]
async fn test_public_routes_ignore_bad_tokens() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get()
        .uri("/api/v1/posts")
        .insert_header(("Authorization", "Bearer garbage"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    Ok(())
}

#[actix_web::test]
async fn test_protected_prod_routes_require_token() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let requests = [
        test::TestRequest::post()
            .uri("/api/v1/posts")
            .set_json(json!({"title": "t", "content": "c"})),
        test::TestRequest::put()
            .uri("/api/v1/posts/1")
            .set_json(json!({"title": "t", "content": "c"})),
        test::TestRequest::delete().uri("/api/v1/posts/1"),
        test::TestRequest::post()
            .uri("/api/v1/posts/1/comments")
            .set_json(json!({"content": "c"})),
    ];

    for req in requests {
        assert_error_response(
            test::call_service(&app, req.to_request()).await,
            StatusCode::UNAUTHORIZED,
            "MISSING_TOKEN",
        )
        .await;
    }
    Ok(())
}
