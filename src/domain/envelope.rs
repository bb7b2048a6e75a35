use serde_json::Value;

// JSON truthiness: missing, null, false, 0 and "" are all falsy.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

// The envelope's `success` flag decides the outcome, not the HTTP status.
pub fn envelope_succeeded(body: &Value) -> bool {
    is_truthy(body.get("success"))
}

// Backend `message`, then `error`, then the route fallback. Empty strings are skipped.
pub fn upstream_message(body: &Value, fallback: &str) -> String {
    text_field(body, "message")
        .or_else(|| text_field(body, "error"))
        .unwrap_or(fallback)
        .to_string()
}

// Rejections only carry the envelope's `message`.
pub fn rejection_message(body: &Value, fallback: &str) -> String {
    text_field(body, "message").unwrap_or(fallback).to_string()
}

// Missing or null `notices` becomes an empty list. Any other non-array shape is
// coerced to an empty list too, with a warning, since the browser expects an array.
pub fn notices_of(body: &Value) -> Vec<Value> {
    match body.get("notices") {
        Some(Value::Array(items)) => items.clone(),
        None | Some(Value::Null) => Vec::new(),
        Some(other) => {
            tracing::warn!(kind = json_kind(other), "backend notices field is not an array.");
            Vec::new()
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn text_field<'a>(body: &'a Value, key: &str) -> Option<&'a str> {
    body.get(key)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
}
