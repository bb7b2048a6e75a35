use crate::frameworks::config::GatewayConfig;
use crate::interface_adapters::clients::BackendClient;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;
use axum::ServiceExt;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::net::TcpListener;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run() -> ExitCode {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = match GatewayConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(backend_url = %config.backend_url, "backend client configured.");

    // Bind TCP listener with error handling.
    let listener = match TcpListener::bind(config.addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %config.addr, error = %e, "failed to bind");
            return ExitCode::FAILURE; // Abort startup on bind failure.
        }
    };
    tracing::info!(addr = %config.addr, "listening");

    // Serve app and report errors rather than panicking.
    if let Err(e) = serve(listener, &config).await {
        tracing::error!(error = %e, "server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

// Serve the gateway on an already bound listener until Ctrl-C.
pub async fn serve(listener: TcpListener, config: &GatewayConfig) -> std::io::Result<()> {
    let backend = Arc::new(BackendClient::new(config.backend_url.clone()));
    let state = Arc::new(AppState { backend });

    // Rewrites wrap the router so they run before route matching.
    let app = routes::localized_app(state);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        // Without a signal handler, keep serving.
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
