mod backend;
mod envelope;
mod errors;
mod platform;
pub mod proxy;
mod rewrite;
mod session;

// Re-export the domain boundary types and ports.
pub use backend::{BackendError, BackendMethod, BackendReply, BackendRequest, JudgeBackend};
pub use envelope::{envelope_succeeded, notices_of, rejection_message, upstream_message};
pub use errors::ProxyError;
pub use platform::ClientPlatform;
pub use proxy::ProxyRoute;
pub use rewrite::{LOCALIZED_ROUTES, RewriteRule, RewriteTable};
pub use session::{TOKEN_REVOKED_CODE, is_auth_error, is_token_revoked};
