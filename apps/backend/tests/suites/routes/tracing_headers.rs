use actix_web::http::StatusCode;
use actix_web::test;

use crate::common::assert_error_response;
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn test_every_response_carries_request_id() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    let id = resp
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-request-id should be set");
    assert!(!id.is_empty());
    Ok(())
}

#[actix_web::test]
async fn test_error_trace_id_matches_request_id() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::delete()
        .uri("/api/v1/posts/1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let request_id = resp
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .expect("x-request-id should be set");

    let err = assert_error_response(resp, StatusCode::UNAUTHORIZED, "MISSING_TOKEN").await;
    assert_eq!(err.trace_id, request_id);
    assert_ne!(err.trace_id, "unknown");
    Ok(())
}

#[actix_web::test]
async fn test_distinct_requests_get_distinct_ids() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let mut ids = Vec::new();
    for _ in 0..3 {
        let req = test::TestRequest::get().uri("/api/v1/posts/nope").to_request();
        let err =
            assert_error_response(test::call_service(&app, req).await, StatusCode::NOT_FOUND, "POST_NOT_FOUND")
                .await;
        ids.push(err.trace_id);
    }
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3);
    Ok(())
}
