//! Backend test support utilities
//!
//! Helpers shared by the backend's unit and integration tests: unified
//! logging initialization, unique test data, and assertions for the JSON
//! error contract.

pub mod error_body;
pub mod logging;
pub mod unique_helpers;

pub use error_body::{assert_error_body, ErrorBodyLike};
pub use unique_helpers::{unique_email, unique_username};
