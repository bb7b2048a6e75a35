use async_trait::async_trait;
use serde_json::Value;

// HTTP methods the gateway forwards. Kept local so the domain does not depend on reqwest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendMethod {
    Get,
    Post,
}

// A single outbound call to the judge backend.
#[derive(Debug, Clone)]
pub struct BackendRequest {
    pub method: BackendMethod,
    // Path appended to the configured base URL, starting with '/'.
    pub path: &'static str,
    // Forwarded verbatim when present.
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

// Backend reply with the body already decoded as JSON.
#[derive(Debug, Clone)]
pub struct BackendReply {
    pub status: u16,
    pub body: Value,
}

impl BackendReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("backend transport error: {0}")]
    Transport(String),
    #[error("backend response decode error: {0}")]
    Decode(String),
}

// Handlers depend on this port, not on the reqwest client.
#[async_trait]
pub trait JudgeBackend: Send + Sync {
    async fn forward(&self, req: BackendRequest) -> Result<BackendReply, BackendError>;
}

#[async_trait]
impl<T> JudgeBackend for std::sync::Arc<T>
where
    T: JudgeBackend + ?Sized,
{
    async fn forward(&self, req: BackendRequest) -> Result<BackendReply, BackendError> {
        (**self).forward(req).await
    }
}
