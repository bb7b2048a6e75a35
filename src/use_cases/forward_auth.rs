use serde_json::Value;

use crate::domain::{
    BackendMethod, BackendRequest, JudgeBackend, ProxyError, ProxyRoute, envelope_succeeded,
    rejection_message,
};
use crate::use_cases::{forward_once, upstream_failure};

// Forwards a password-recovery style POST and enforces the `success` envelope.
pub struct ForwardAuthUseCase<B> {
    pub backend: B,
    pub route: ProxyRoute,
}

impl<B> ForwardAuthUseCase<B>
where
    B: JudgeBackend,
{
    pub async fn execute(
        &self,
        body: Value,
        authorization: Option<String>,
    ) -> Result<Value, ProxyError> {
        let req = BackendRequest {
            method: BackendMethod::Post,
            path: self.route.backend_path,
            authorization,
            body: Some(body),
        };
        let reply = forward_once(&self.backend, &self.route, req).await?;

        if !reply.is_success() {
            return Err(upstream_failure(&self.route, &reply));
        }

        // A 2xx with `success: false` is still a failure.
        if !envelope_succeeded(&reply.body) {
            tracing::info!(route = self.route.name, "backend rejected the request.");
            return Err(ProxyError::Rejected {
                message: rejection_message(&reply.body, self.route.fallback_message),
            });
        }

        Ok(reply.body)
    }
}
