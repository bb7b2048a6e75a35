use crate::interface_adapters::handlers::{ProxyResult, authorization_of, error_response};
use crate::interface_adapters::state::AppState;
use crate::use_cases::fetch_notices::{FetchNoticesUseCase, NoticeList};
use axum::{Json, extract::State, http::HeaderMap};
use std::sync::Arc;

#[tracing::instrument(name = "staff_notices", skip_all)]
pub async fn staff_notices(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ProxyResult<NoticeList> {
    let use_case = FetchNoticesUseCase {
        backend: state.backend.clone(),
    };

    let notices = use_case
        .execute(authorization_of(&headers))
        .await
        .map_err(error_response)?;

    tracing::debug!(count = notices.notices.len(), "staff notices fetched.");
    Ok(Json(notices))
}
