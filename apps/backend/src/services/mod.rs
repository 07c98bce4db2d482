pub mod comments;
pub mod credentials;
pub mod inputs;
pub mod ownership;
pub mod posts;
pub mod validation;
pub mod views;
