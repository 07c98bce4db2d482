//! SeaORM adapters. Functions here return `DbErr`; repos translate.

pub mod comments_sea;
pub mod posts_sea;
pub mod users_sea;
