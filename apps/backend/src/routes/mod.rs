use actix_web::web;

pub mod auth;
pub mod comments;
pub mod health;
pub mod posts;

/// Register every route. Protected routes carry `JwtExtract` themselves,
/// so `main` and the tests share this one function.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // /, /health
    health::configure_routes(cfg);

    // /api/auth/**
    cfg.service(web::scope("/api/auth").configure(auth::configure_routes));

    // /api/v1/posts/**
    cfg.service(web::scope("/api/v1/posts").configure(posts::configure_routes));
}
