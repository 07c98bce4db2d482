use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

use crate::auth::claims::AuthenticatedUser;
use crate::trace_ctx::TraceId;

/// Emits one `request_completed` event per request, levelled by status
/// class. Carries `user_id` when the route was behind `JwtExtract`.
pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let started = Instant::now();
        let line = CompletedRequest {
            method: req.method().to_string(),
            path: req.path().to_string(),
            trace_id: req
                .extensions()
                .get::<TraceId>()
                .map(|t| t.0.clone())
                .unwrap_or_else(|| "unknown".to_string()),
        };

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let (status, user_id) = match &result {
                // JwtExtract runs inside this middleware, so the identity is
                // visible once the response comes back.
                Ok(res) => (
                    res.status(),
                    res.request()
                        .extensions()
                        .get::<AuthenticatedUser>()
                        .map(|u| u.id),
                ),
                Err(err) => (err.as_response_error().status_code(), None),
            };

            line.emit(status, user_id, started.elapsed().as_micros() as u64);
            result
        })
    }
}

struct CompletedRequest {
    method: String,
    path: String,
    trace_id: String,
}

impl CompletedRequest {
    fn emit(&self, status: StatusCode, user_id: Option<i32>, duration_us: u64) {
        let code = status.as_u16();
        let (method, path, trace_id) = (&self.method, &self.path, &self.trace_id);
        if status.is_server_error() {
            error!(http.method = %method, url.path = %path, http.status_code = code, user_id, duration_us, trace_id = %trace_id, "request_completed");
        } else if status.is_client_error() {
            warn!(http.method = %method, url.path = %path, http.status_code = code, user_id, duration_us, trace_id = %trace_id, "request_completed");
        } else {
            info!(http.method = %method, url.path = %path, http.status_code = code, user_id, duration_us, trace_id = %trace_id, "request_completed");
        }
    }
}
