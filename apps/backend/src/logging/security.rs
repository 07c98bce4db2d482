//! Security-relevant log events with stable `event` names for alerting.

use tracing::warn;

use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// A login attempt was rejected. `reason` stays server-side; the client
/// only ever sees the generic invalid-credentials message.
pub fn login_failed(reason: &str, username: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_LOGIN_FAILED",
        %trace_id,
        username = %Redacted(username),
        reason,
        "Authentication failure"
    );
}

/// A bearer token was rejected by the JWT middleware.
pub fn token_rejected(reason: &str, path: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_TOKEN_REJECTED",
        %trace_id,
        reason,
        path,
        "Bearer token rejected"
    );
}

/// An authenticated user tried to mutate a resource they do not own.
pub fn ownership_denied(resource: &str, resource_id: i32, owner_id: i32, requester_id: i32) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_OWNERSHIP_DENIED",
        %trace_id,
        resource,
        resource_id,
        owner_id,
        requester_id,
        "Mutation denied: requester is not the owner"
    );
}
