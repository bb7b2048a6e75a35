use crate::domain::ProxyError;
use crate::domain::proxy::{
    FORGOT_PASSWORD, INTERNAL_ERROR_MESSAGE, ProxyRoute, RESET_PASSWORD, VERIFY_RESET_TOKEN,
};
use crate::interface_adapters::handlers::{ProxyResult, authorization_of, error_response};
use crate::interface_adapters::state::AppState;
use crate::use_cases::forward_auth::ForwardAuthUseCase;
use axum::{Json, body::Bytes, extract::State, http::HeaderMap};
use serde_json::Value;
use std::sync::Arc;

#[tracing::instrument(name = "forgot_password", skip_all)]
pub async fn forgot_password(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> ProxyResult<Value> {
    forward(&state, FORGOT_PASSWORD, &headers, &body).await
}

#[tracing::instrument(name = "verify_reset_token", skip_all)]
pub async fn verify_reset_token(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> ProxyResult<Value> {
    forward(&state, VERIFY_RESET_TOKEN, &headers, &body).await
}

#[tracing::instrument(name = "reset_password", skip_all)]
pub async fn reset_password(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> ProxyResult<Value> {
    forward(&state, RESET_PASSWORD, &headers, &body).await
}

async fn forward(
    state: &AppState,
    route: ProxyRoute,
    headers: &HeaderMap,
    body: &[u8],
) -> ProxyResult<Value> {
    // A malformed body is an internal failure, same as a malformed backend reply.
    let payload: Value = serde_json::from_slice(body).map_err(|err| {
        tracing::error!(route = route.name, error = %err, "failed to parse request body.");
        error_response(ProxyError::Internal {
            message: INTERNAL_ERROR_MESSAGE.to_string(),
        })
    })?;

    let use_case = ForwardAuthUseCase {
        backend: state.backend.clone(),
        route,
    };

    let result = use_case
        .execute(payload, authorization_of(headers))
        .await
        .map_err(error_response)?;

    tracing::info!(route = route.name, "request forwarded successfully.");
    Ok(Json(result))
}
