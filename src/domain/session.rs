use serde_json::Value;

// Error code the backend attaches when a session token was revoked server-side.
pub const TOKEN_REVOKED_CODE: &str = "TOKEN_REVOKED";

const REVOKED_MARKER: &str = "revoked";

// Caught errors have no guaranteed shape, so classification inspects JSON fields.
// True for a plain 401 as well as for any revocation signal.
pub fn is_auth_error(err: &Value) -> bool {
    has_status(err, 401) || has_revoked_code(err) || message_mentions_revoked(err)
}

// Stricter than `is_auth_error`: a bare 401 means "log in again", not "revoked".
pub fn is_token_revoked(err: &Value) -> bool {
    err.pointer("/response/data/error").and_then(Value::as_str) == Some(TOKEN_REVOKED_CODE)
        || has_revoked_code(err)
        || message_mentions_revoked(err)
}

// Direct and nested statuses are checked independently; either may be junk.
fn has_status(err: &Value, expected: u64) -> bool {
    numeric(err.get("status")) == Some(expected)
        || numeric(err.pointer("/response/status")) == Some(expected)
}

fn numeric(status: Option<&Value>) -> Option<u64> {
    match status? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn has_revoked_code(err: &Value) -> bool {
    err.get("code").and_then(Value::as_str) == Some(TOKEN_REVOKED_CODE)
}

fn message_mentions_revoked(err: &Value) -> bool {
    err.get("message")
        .and_then(Value::as_str)
        .is_some_and(|message| message.contains(REVOKED_MARKER))
}
