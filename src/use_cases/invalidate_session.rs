use serde_json::Value;
use url::form_urlencoded;

use crate::domain::{ClientPlatform, is_token_revoked};

pub const LOGIN_PATH: &str = "/login";
pub const REVOKED_SESSION_MESSAGE: &str = "Sua sessão foi encerrada. Faça login novamente.";

// What the invalidator decided for a given error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidationOutcome {
    // Not a revocation; nothing happened.
    Ignored,
    // Revocation detected but no client platform to act on.
    Unavailable,
    Invalidated { location: String },
}

// Wipes client state and sends the user to login once a revoked token is seen.
pub struct SessionInvalidator<P> {
    // `None` outside a client context, which turns every call into a no-op.
    pub platform: Option<P>,
}

impl<P> SessionInvalidator<P>
where
    P: ClientPlatform,
{
    pub fn handle(&self, err: &Value) -> InvalidationOutcome {
        if !is_token_revoked(err) {
            return InvalidationOutcome::Ignored;
        }

        let Some(platform) = &self.platform else {
            return InvalidationOutcome::Unavailable;
        };

        // Clear first so the login page never sees the stale token.
        platform.clear_storage();
        let location = login_location(REVOKED_SESSION_MESSAGE);
        platform.navigate(&location);

        tracing::info!("revoked session cleared.");
        InvalidationOutcome::Invalidated { location }
    }
}

pub fn login_location(message: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("message", message)
        .finish();
    format!("{LOGIN_PATH}?{query}")
}
