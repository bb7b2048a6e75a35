use crate::domain::RewriteTable;
use crate::interface_adapters::handlers::auth::{
    forgot_password, reset_password, verify_reset_token,
};
use crate::interface_adapters::handlers::notices::staff_notices;
use crate::interface_adapters::handlers::pages;
use crate::interface_adapters::state::AppState;
use axum::{
    Router,
    extract::Request,
    http::Uri,
    routing::{get, post},
};
use std::sync::Arc;
use tower::Layer;
use tower::util::{MapRequest, MapRequestLayer};
use tower_http::trace::TraceLayer;

// Router wrapped in the rewrite step, so rewrites happen before route matching.
pub type LocalizedApp = MapRequest<Router, fn(Request) -> Request>;

pub fn app(state: Arc<AppState>) -> Router {
    // Wire the HTTP routes to their handlers.
    Router::new()
        .route("/api/auth/forgot-password", post(forgot_password))
        .route("/api/auth/verify-reset-token", post(verify_reset_token))
        .route("/api/auth/reset-password", post(reset_password))
        .route("/api/home/staff/notices", get(staff_notices))
        .route("/entrar", get(pages::login))
        .route("/cadastro", get(pages::register))
        .route("/cadastro/{*step}", get(pages::register_step))
        .route("/esqueci-senha", get(pages::forgot_password))
        .route("/resetar-senha", get(pages::reset_password))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub fn localized_app(state: Arc<AppState>) -> LocalizedApp {
    MapRequestLayer::new(rewrite_localized as fn(Request) -> Request).layer(app(state))
}

fn rewrite_localized(req: Request) -> Request {
    rewrite_request(&RewriteTable::localized(), req)
}

// Swap the request path for its rewritten form, keeping the query string.
pub fn rewrite_request(table: &RewriteTable, mut req: Request) -> Request {
    let rewritten = table.resolve(req.uri().path()).into_owned();
    if rewritten == req.uri().path() {
        return req;
    }

    let path_and_query = match req.uri().query() {
        Some(query) => format!("{rewritten}?{query}"),
        None => rewritten,
    };

    let mut parts = req.uri().clone().into_parts();
    match path_and_query.parse() {
        Ok(value) => parts.path_and_query = Some(value),
        Err(err) => {
            tracing::warn!(error = %err, "rewritten path is not a valid uri.");
            return req;
        }
    }

    match Uri::from_parts(parts) {
        Ok(uri) => {
            tracing::debug!(from = %req.uri().path(), to = %uri.path(), "path rewritten.");
            *req.uri_mut() = uri;
        }
        Err(err) => tracing::warn!(error = %err, "failed to rebuild rewritten uri."),
    }
    req
}
