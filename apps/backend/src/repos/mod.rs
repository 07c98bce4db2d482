//! Repository functions: domain types over the SeaORM adapters.

pub mod comments;
pub mod posts;
pub mod users;
