//! Host startup and runtime errors.

use std::net::SocketAddr;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// An environment value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The spaces API base URL is unusable.
    #[error("invalid spaces API base URL: {0}")]
    ApiConfig(#[from] client::config::ConfigError),

    /// `[package.metadata.leptos]` could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    /// The upstream HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(#[from] reqwest::Error),

    #[error("failed to bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: std::io::Error },

    #[error("server failed: {0}")]
    Serve(std::io::Error),
}
