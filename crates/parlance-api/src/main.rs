//! Parlance webhook server entry point.
//!
//! Binary name: `parlance`
//!
//! Loads configuration, wires the application state, and serves the
//! Telegram webhook until SIGINT or SIGTERM.

mod http;
mod state;

use parlance_infra::config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let enable_otel = std::env::var("PARLANCE_OTEL").is_ok_and(|v| v == "1");
    parlance_observe::tracing_setup::init_tracing(enable_otel)
        .map_err(|e| anyhow::anyhow!("tracing init failed: {e}"))?;

    // Missing credentials are fatal; the process refuses to start.
    let config = Config::load().await?;
    let addr = format!("{}:{}", config.host, config.port);

    let state = AppState::init(&config).await?;
    let router = http::router::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, model = %config.model, "webhook server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    parlance_observe::tracing_setup::shutdown_tracing();
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
