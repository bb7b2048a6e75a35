// Outcomes a proxy route can fail with. Each maps to exactly one HTTP status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProxyError {
    // Required `Authorization` header was absent; the backend was never called.
    #[error("{message}")]
    MissingCredentials { message: String },
    // Backend answered with a non-2xx status.
    #[error("{message}")]
    Upstream { status: u16, message: String },
    // Backend answered 2xx but the envelope reported `success: false`.
    #[error("{message}")]
    Rejected { message: String },
    // Transport or decode failure. The cause is logged, never returned.
    #[error("{message}")]
    Internal { message: String },
}

impl ProxyError {
    pub fn status(&self) -> u16 {
        match self {
            ProxyError::MissingCredentials { .. } => 401,
            ProxyError::Upstream { status, .. } => *status,
            ProxyError::Rejected { .. } => 400,
            ProxyError::Internal { .. } => 500,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ProxyError::MissingCredentials { message }
            | ProxyError::Upstream { message, .. }
            | ProxyError::Rejected { message }
            | ProxyError::Internal { message } => message,
        }
    }
}
