use serde::{Deserialize, Serialize};

// Error envelope returned to the browser by every proxy route.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// Query accepted by the login page.
#[derive(Debug, Default, Deserialize)]
pub struct LoginPageQuery {
    // Set by the session invalidator after a revocation.
    pub message: Option<String>,
}
