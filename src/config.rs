//! Host configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use client::config::ApiConfig;

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Spaces API the rendered page talks to.
    pub api: ApiConfig,
    /// Request timeout for the readiness probe against the spaces API.
    pub upstream_timeout_secs: u64,
}

impl ServerConfig {
    /// Build typed host config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `SPACES_API_BASE_URL` (legacy alias `BASE_URL_SERVER`): default `http://localhost:6656/`
    /// - `UPSTREAM_TIMEOUT_SECS`: default 5
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ServerError::ConfigParse(format!("invalid PORT: {raw}")))?,
            None => DEFAULT_PORT,
        };
        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ServerError::ConfigParse(format!("invalid BIND_ADDR: {raw}")))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let base_url = lookup("SPACES_API_BASE_URL").or_else(|| lookup("BASE_URL_SERVER"));
        let api = ApiConfig::from_optional(base_url.as_deref())?;
        let upstream_timeout_secs = lookup("UPSTREAM_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS);

        Ok(Self { bind_addr, port, api, upstream_timeout_secs })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
