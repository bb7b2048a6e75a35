// Shared bootstrapping for integration tests: a stub judge backend plus the gateway.
use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    routing::{get, post},
};
use serde_json::{Value, json};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use tokio::net::TcpListener;

// Counts how often each stub endpoint was reached.
#[derive(Clone, Default)]
pub struct BackendHits {
    notices: Arc<AtomicUsize>,
}

impl BackendHits {
    pub fn notices(&self) -> usize {
        self.notices.load(Ordering::SeqCst)
    }
}

// Stub backend speaking the judge's envelope format.
fn stub_backend(hits: BackendHits) -> Router {
    Router::new()
        .route(
            "/api/auth/forgot-password",
            post(|Json(body): Json<Value>| async move {
                if body["email"] == "a@b.com" {
                    (StatusCode::OK, Json(json!({ "success": true, "message": "sent" })))
                } else {
                    (StatusCode::NOT_FOUND, Json(json!({ "error": "Email não cadastrado" })))
                }
            }),
        )
        .route(
            "/api/auth/verify-reset-token",
            post(|| async { Json(json!({ "success": false, "message": "Token expirado" })) }),
        )
        .route(
            "/api/auth/reset-password",
            post(|Json(body): Json<Value>| async move {
                if body["token"] == "valid" {
                    (
                        StatusCode::OK,
                        Json(json!({ "success": true, "message": "Senha redefinida" })),
                    )
                } else {
                    (StatusCode::BAD_REQUEST, Json(json!({})))
                }
            }),
        )
        .route(
            "/api/home/staff/notices",
            get(move |headers: HeaderMap| {
                let hits = hits.clone();
                async move {
                    hits.notices.fetch_add(1, Ordering::SeqCst);
                    let token = headers
                        .get(AUTHORIZATION)
                        .and_then(|value| value.to_str().ok())
                        .unwrap_or_default()
                        .to_string();
                    if token == "Bearer revoked" {
                        return (
                            StatusCode::UNAUTHORIZED,
                            Json(json!({ "code": "TOKEN_REVOKED", "message": "token revoked" })),
                        );
                    }
                    (
                        StatusCode::OK,
                        Json(json!({ "notices": [{ "id": 1, "title": "Prova sexta" }] })),
                    )
                }
            }),
        )
}

async fn spawn_backend(hits: BackendHits) -> String {
    // Bind to an ephemeral port to avoid collisions with local services.
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral backend port");
    let addr = listener.local_addr().expect("get backend addr");
    tokio::spawn(async move {
        axum::serve(listener, stub_backend(hits))
            .await
            .expect("stub backend failed");
    });
    format!("http://{addr}")
}

// Start a stub backend and a gateway pointed at it; returns the gateway base URL.
pub async fn spawn_gateway() -> (String, BackendHits) {
    let hits = BackendHits::default();
    let backend_url = spawn_backend(hits.clone()).await;

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral gateway port");
    let addr = listener.local_addr().expect("get gateway addr");
    let config = ataljudge_web::GatewayConfig::from_lookup(|key| match key {
        "BACKEND_URL" => Some(backend_url.clone()),
        _ => None,
    })
    .expect("valid test config");

    tokio::spawn(async move {
        ataljudge_web::serve(listener, &config)
            .await
            .expect("gateway failed");
    });

    (format!("http://{addr}"), hits)
}

// Gateway pointed at a port nothing listens on.
pub async fn spawn_gateway_without_backend() -> String {
    let unused = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind throwaway port");
    let dead_addr = unused.local_addr().expect("get throwaway addr");
    drop(unused);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral gateway port");
    let addr = listener.local_addr().expect("get gateway addr");
    let config = ataljudge_web::GatewayConfig::from_lookup(|key| match key {
        "BACKEND_URL" => Some(format!("http://{dead_addr}")),
        _ => None,
    })
    .expect("valid test config");

    tokio::spawn(async move {
        ataljudge_web::serve(listener, &config)
            .await
            .expect("gateway failed");
    });

    format!("http://{addr}")
}
