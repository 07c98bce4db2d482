//! Error body assertions
//!
//! Mirrors the backend's JSON error shape without depending on backend types,
//! so the contract is checked from the outside.

use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Local copy of the backend's error body.
#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorBodyLike {
    pub error: String,
    pub code: String,
    pub status: u16,
    pub trace_id: String,
}

/// Assert that response parts conform to the stable error contract:
/// - HTTP status matches expected
/// - body parses as an error body with the expected code and status
/// - `x-trace-id` header exists and equals the body's trace_id
///
/// Returns the parsed body for further checks.
pub fn assert_error_body(
    status: StatusCode,
    headers: &HeaderMap,
    body_bytes: &[u8],
    expected_code: &str,
    expected_status: StatusCode,
) -> ErrorBodyLike {
    assert_eq!(status, expected_status);

    let body: ErrorBodyLike =
        serde_json::from_slice(body_bytes).expect("response body should be a JSON error body");

    let trace_id_header = headers
        .get("x-trace-id")
        .expect("x-trace-id header should be present")
        .to_str()
        .expect("x-trace-id header should be valid UTF-8");

    assert_eq!(
        body.trace_id, trace_id_header,
        "trace_id in body should match x-trace-id header"
    );
    assert_eq!(body.code, expected_code);
    assert_eq!(body.status, expected_status.as_u16());
    assert!(!body.error.is_empty(), "error message should not be empty");

    body
}
