use serde::Serialize;
use serde_json::Value;

use crate::domain::proxy::{MISSING_TOKEN_MESSAGE, STAFF_NOTICES};
use crate::domain::{BackendMethod, BackendRequest, JudgeBackend, ProxyError, notices_of};
use crate::use_cases::{forward_once, upstream_failure};

// Response returned by the notices use case; `notices` is never null.
#[derive(Debug, Serialize)]
pub struct NoticeList {
    pub notices: Vec<Value>,
}

// Staff notices require a bearer token before anything leaves the gateway.
pub struct FetchNoticesUseCase<B> {
    pub backend: B,
}

impl<B> FetchNoticesUseCase<B>
where
    B: JudgeBackend,
{
    pub async fn execute(&self, authorization: Option<String>) -> Result<NoticeList, ProxyError> {
        let Some(authorization) = authorization.filter(|value| !value.trim().is_empty()) else {
            return Err(ProxyError::MissingCredentials {
                message: MISSING_TOKEN_MESSAGE.to_string(),
            });
        };

        let req = BackendRequest {
            method: BackendMethod::Get,
            path: STAFF_NOTICES.backend_path,
            authorization: Some(authorization),
            body: None,
        };
        let reply = forward_once(&self.backend, &STAFF_NOTICES, req).await?;

        if !reply.is_success() {
            return Err(upstream_failure(&STAFF_NOTICES, &reply));
        }

        Ok(NoticeList {
            notices: notices_of(&reply.body),
        })
    }
}
