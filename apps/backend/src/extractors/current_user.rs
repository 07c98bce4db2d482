use std::future::{ready, Ready};
use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::auth::claims::AuthenticatedUser;
use crate::error::AppError;

/// Identity placed in request extensions by `JwtExtract`.
///
/// Only meaningful on routes wrapped by that middleware; anywhere else the
/// extension is absent and extraction fails with `MissingToken`.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub AuthenticatedUser);

impl Deref for CurrentUser {
    type Target = AuthenticatedUser;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<AuthenticatedUser>()
                .cloned()
                .map(CurrentUser)
                .ok_or(AppError::MissingToken),
        )
    }
}
