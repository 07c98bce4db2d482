#![allow(dead_code)]

pub mod auth;

pub use app_builder::create_test_app;
pub use test_state::{build_test_state, test_security};
