use std::env;

use crate::config::db::must_var;
use crate::error::AppError;

/// Listener and signing settings for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
}

impl ServerConfig {
    /// `BACKEND_HOST` (default `0.0.0.0`), `BACKEND_PORT` (default `8080`),
    /// `BACKEND_JWT_SECRET` (required).
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("BACKEND_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| AppError::config(format!("BACKEND_PORT is not a valid port: '{raw}'")))?,
            Err(_) => 8080,
        };
        let jwt_secret = must_var("BACKEND_JWT_SECRET")?;

        Ok(Self {
            host,
            port,
            jwt_secret,
        })
    }
}
