pub mod auth;
pub mod notices;
pub mod pages;

use crate::domain::ProxyError;
use crate::interface_adapters::protocol::ErrorResponse;
use axum::{
    Json,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
};

pub(crate) type ProxyResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

// Convert a proxy failure into the `{ error }` JSON body and its status.
pub(crate) fn error_response(err: ProxyError) -> (StatusCode, Json<ErrorResponse>) {
    let status = StatusCode::from_u16(err.status()).unwrap_or(StatusCode::BAD_GATEWAY);
    (
        status,
        Json(ErrorResponse {
            error: err.message().to_string(),
        }),
    )
}

// Non-UTF-8 header values are treated as absent.
pub(crate) fn authorization_of(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}
