use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::{unique_email, unique_username};
use serde_json::json;

use crate::common::{assert_error_response, read_json};
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn test_register_success() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "username": unique_username("reg"),
            "password": "pw123456",
            "email": unique_email("reg"),
        }))
        .to_request();
    let body = read_json(test::call_service(&app, req).await, StatusCode::CREATED).await;

    assert_eq!(body["message"], "User registered successfully");
    assert!(body.get("password_hash").is_none());
    Ok(())
}

#[actix_web::test]
async fn test_register_duplicate_username_or_email() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let username = unique_username("dup");
    let email = unique_email("dup");
    let first = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({"username": username, "password": "pw", "email": email}))
        .to_request();
    assert_eq!(test::call_service(&app, first).await.status(), StatusCode::CREATED);

    for body in [
        json!({"username": username, "password": "pw", "email": unique_email("other")}),
        json!({"username": unique_username("other"), "password": "pw", "email": email}),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(body)
            .to_request();
        let err = assert_error_response(
            test::call_service(&app, req).await,
            StatusCode::CONFLICT,
            "CONFLICT",
        )
        .await;
        assert_eq!(err.error, "Username or email already exists");
    }
    Ok(())
}

#[actix_web::test]
async fn test_register_invalid_input() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let cases = [
        json!({"username": "", "password": "pw", "email": "a@x.com"}),
        json!({"username": "bob", "password": "", "email": "b@x.com"}),
        json!({"username": "bob", "password": "pw", "email": "not-an-email"}),
        json!({"username": "x".repeat(51), "password": "pw", "email": "c@x.com"}),
        json!({"username": "bob", "password": "pw"}),
    ];

    for body in cases {
        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(body)
            .to_request();
        assert_error_response(
            test::call_service(&app, req).await,
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
        )
        .await;
    }
    Ok(())
}

#[actix_web::test]
async fn test_register_malformed_json() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"username\": ")
        .to_request();
    assert_error_response(
        test::call_service(&app, req).await,
        StatusCode::BAD_REQUEST,
        "BAD_REQUEST",
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn test_whitespace_password_registers_and_logs_in() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;
    let username = unique_username("spaces");

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({"username": username, "password": "   ", "email": unique_email("spaces")}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({"username": username, "password": "   "}))
        .to_request();
    let body = read_json(test::call_service(&app, req).await, StatusCode::OK).await;
    assert!(body["token"].is_string());

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({"username": username, "password": "  "}))
        .to_request();
    assert_error_response(
        test::call_service(&app, req).await,
        StatusCode::UNAUTHORIZED,
        "INVALID_CREDENTIALS",
    )
    .await;
    Ok(())
}
