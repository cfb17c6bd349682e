mod config;
mod error;
mod routes;
mod state;
mod upstream;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "spaces-web stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    // A missing .env file is fine; the process environment still applies.
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env loaded");
    }

    let config = ServerConfig::from_env()?;
    let addr = config.socket_addr();
    tracing::info!(
        base_url = config.api.base_url(),
        upstream_timeout_secs = config.upstream_timeout_secs,
        "spaces API configured"
    );

    let state = state::AppState::new(config)?;
    let app = routes::app(state)?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, "spaces-web listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
