//! Bearer-token middleware for the protected route set.
//!
//! On success the verified identity is stored in request extensions as an
//! [`AuthenticatedUser`]; on failure the request is answered with a 401
//! here and never reaches the handler.

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{self, HeaderValue};
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::{ready, LocalBoxFuture, Ready};

use crate::auth::claims::AuthenticatedUser;
use crate::auth::jwt::verify_access_token;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::logging::security;
use crate::state::app_state::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// Pull the token out of an `Authorization` header value.
///
/// The scheme is matched case-sensitively with exactly one space; anything
/// else, including an empty token, is `MissingToken`.
pub fn parse_bearer(header_value: Option<&HeaderValue>) -> Result<&str, AppError> {
    let raw = header_value
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::MissingToken)?;
    let token = raw
        .strip_prefix(BEARER_PREFIX)
        .ok_or(AppError::MissingToken)?;
    if token.is_empty() || token.starts_with(char::is_whitespace) {
        return Err(AppError::MissingToken);
    }
    Ok(token)
}

pub struct JwtExtract;

impl<S, B> Transform<S, ServiceRequest> for JwtExtract
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtExtractMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtExtractMiddleware { service }))
    }
}

pub struct JwtExtractMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for JwtExtractMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let verified = authenticate(&req);

        match verified {
            Ok(user) => {
                req.extensions_mut().insert(user);
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            Err(err) => Box::pin(async move {
                // built inside the future so the trace context is in scope
                security::token_rejected(err.code().as_str(), req.path());
                let response = err.error_response();
                Ok(req.into_response(response).map_into_right_body())
            }),
        }
    }
}

fn authenticate(req: &ServiceRequest) -> Result<AuthenticatedUser, AppError> {
    let token = parse_bearer(req.headers().get(header::AUTHORIZATION))?;

    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::internal(ErrorCode::Internal, "AppState not available"))?;

    let claims = verify_access_token(token, &state.security)?;
    Ok(AuthenticatedUser::from(claims))
}
