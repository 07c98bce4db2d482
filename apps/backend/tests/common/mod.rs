#![allow(dead_code)]

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::{assert_error_body, ErrorBodyLike};
use serde_json::Value;

// Logging is auto-installed for every test binary that includes this module
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Consume an error response and check it against the JSON error contract.
pub async fn assert_error_response(
    resp: ServiceResponse<BoxBody>,
    expected_status: StatusCode,
    expected_code: &str,
) -> ErrorBodyLike {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = test::read_body(resp).await;
    assert_error_body(status, &headers, &body, expected_code, expected_status)
}

/// Consume a success response and parse its JSON body.
pub async fn read_json(resp: ServiceResponse<BoxBody>, expected_status: StatusCode) -> Value {
    assert_eq!(resp.status(), expected_status);
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).expect("response body should be JSON")
}
