pub mod fetch_notices;
pub mod forward_auth;
pub mod invalidate_session;

#[cfg(test)]
pub(crate) mod test_support;

use crate::domain::proxy::INTERNAL_ERROR_MESSAGE;
use crate::domain::{
    BackendReply, BackendRequest, JudgeBackend, ProxyError, ProxyRoute, is_auth_error,
    is_token_revoked, upstream_message,
};
use serde_json::{Value, json};

// Single attempt: no retry, no timeout beyond what the transport applies.
async fn forward_once<B>(
    backend: &B,
    route: &ProxyRoute,
    req: BackendRequest,
) -> Result<BackendReply, ProxyError>
where
    B: JudgeBackend + ?Sized,
{
    backend.forward(req).await.map_err(|err| {
        tracing::error!(route = route.name, error = %err, "backend call failed.");
        ProxyError::Internal {
            message: INTERNAL_ERROR_MESSAGE.to_string(),
        }
    })
}

// Non-2xx replies keep the backend status and surface its message.
fn upstream_failure(route: &ProxyRoute, reply: &BackendReply) -> ProxyError {
    // Revocations are tagged so they stand apart from ordinary auth failures.
    let caught = caught_error(reply);
    tracing::warn!(
        route = route.name,
        status = reply.status,
        auth_error = is_auth_error(&caught),
        revoked = is_token_revoked(&caught),
        "backend returned an error status."
    );

    ProxyError::Upstream {
        status: reply.status,
        message: upstream_message(&reply.body, route.fallback_message),
    }
}

// The error shape a browser client ends up holding for a failed reply.
pub(crate) fn caught_error(reply: &BackendReply) -> Value {
    json!({
        "status": reply.status,
        "code": reply.body.get("code"),
        "message": reply.body.get("message"),
        "response": { "status": reply.status, "data": reply.body },
    })
}
