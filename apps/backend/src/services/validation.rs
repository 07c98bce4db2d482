//! Request-body parsing and field validation shared by the services.

use std::sync::LazyLock;

use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::Error as JsonError;
use tracing::debug;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;

#[allow(clippy::unwrap_used)]
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Field-level checks run after a body has been deserialized.
pub trait Validate {
    fn validate(&self) -> Result<(), AppError>;
}

pub fn require_non_blank(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::invalid(format!("Invalid input: {field} is required")));
    }
    Ok(())
}

/// Like [`require_non_blank`] but whitespace counts as content. Used for
/// passwords, which are hashed as given.
pub fn require_present(field: &str, value: &str) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::invalid(format!("Invalid input: {field} is required")));
    }
    Ok(())
}

pub fn require_max_chars(field: &str, value: &str, max: usize) -> Result<(), AppError> {
    if value.chars().count() > max {
        return Err(AppError::invalid(format!(
            "Invalid input: {field} must be at most {max} characters"
        )));
    }
    Ok(())
}

pub fn require_email(value: &str) -> Result<(), AppError> {
    if !EMAIL_RE.is_match(value) {
        return Err(AppError::invalid("Invalid input: email is not a valid address"));
    }
    Ok(())
}

/// Parse a path id. Only plain positive decimal integers are accepted.
pub fn parse_id(raw: &str) -> Option<i32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<i32>().ok().filter(|id| *id > 0)
}

/// Deserialize a JSON body; failures become sanitized 400s.
pub fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice::<T>(body).map_err(|e| {
        debug!(
            error = %Redacted(&e.to_string()),
            body_size = body.len(),
            "JSON parsing failed"
        );
        classify_json_error(&e)
    })
}

/// Deserialize then validate.
pub fn parse_validated<T: DeserializeOwned + Validate>(body: &[u8]) -> Result<T, AppError> {
    let value: T = parse_json(body)?;
    value.validate()?;
    Ok(value)
}

fn classify_json_error(error: &JsonError) -> AppError {
    use serde_json::error::Category;

    match error.classify() {
        Category::Syntax => AppError::bad_request(
            ErrorCode::BadRequest,
            format!("Invalid JSON at line {}", error.line()),
        ),
        Category::Eof => {
            AppError::bad_request(ErrorCode::BadRequest, "Invalid JSON: unexpected end of input")
        }
        Category::Data => {
            AppError::invalid("Invalid input: missing or wrongly typed fields")
        }
        Category::Io => {
            AppError::bad_request(ErrorCode::BadRequest, "Invalid JSON: I/O error while reading body")
        }
    }
}
