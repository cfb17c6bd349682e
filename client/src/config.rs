//! API configuration injected at startup.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host builds an [`ApiConfig`] from its environment and hands it to the
//! app shell. The shell renders it into a `<meta>` tag, and the hydrating
//! client reads the same value back, so nothing below the app root reads the
//! environment on its own.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Serialize;

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:6656/";

/// Fixed path of the spaces list endpoint, relative to the base URL.
pub const SPACES_PATH: &str = "apiv1/spaces/";

/// Name of the `<meta>` tag carrying the base URL from server to browser.
pub const BASE_URL_META: &str = "spaces-api-base-url";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("base URL is empty")]
    EmptyBaseUrl,
    #[error("base URL must start with http:// or https://: {0}")]
    UnsupportedScheme(String),
    #[error("base URL has no host: {0}")]
    MissingHost(String),
}

/// Where the spaces API lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Validate and normalize a base URL. The stored form always ends in a
    /// single `/`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a blank value, a value without an
    /// `http://` / `https://` scheme, or a value with nothing after the scheme.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, ConfigError> {
        let raw = base_url.as_ref().trim();
        if raw.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        let rest = raw
            .strip_prefix("http://")
            .or_else(|| raw.strip_prefix("https://"))
            .ok_or_else(|| ConfigError::UnsupportedScheme(raw.to_owned()))?;
        if rest.split('/').next().is_none_or(str::is_empty) {
            return Err(ConfigError::MissingHost(raw.to_owned()));
        }
        let trimmed = raw.trim_end_matches('/');
        Ok(Self { base_url: format!("{trimmed}/") })
    }

    /// Configuration baked in at compile time through `SPACES_API_BASE_URL`,
    /// or the default when the variable was unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the compile-time value is invalid.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_optional(option_env!("SPACES_API_BASE_URL"))
    }

    /// Use `raw` when present, otherwise the default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `raw` is present but invalid.
    pub fn from_optional(raw: Option<&str>) -> Result<Self, ConfigError> {
        match raw {
            Some(value) => Self::new(value),
            None => Ok(Self::default()),
        }
    }

    /// Read the base URL the server rendered into the document head.
    ///
    /// Falls back to the build-time configuration, then to the default.
    #[cfg(feature = "hydrate")]
    pub fn from_document() -> Self {
        let injected = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.query_selector(&format!("meta[name=\"{BASE_URL_META}\"]")).ok().flatten())
            .and_then(|el| el.get_attribute("content"));

        if let Some(raw) = injected {
            match Self::new(&raw) {
                Ok(config) => return config,
                Err(e) => leptos::logging::warn!("ignoring injected base URL: {e}"),
            }
        }

        Self::from_build_env().unwrap_or_else(|e| {
            leptos::logging::warn!("ignoring build-time base URL: {e}");
            Self::default()
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the spaces list endpoint.
    pub fn spaces_url(&self) -> String {
        join_url(&self.base_url, SPACES_PATH)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_owned() }
    }
}

/// Join a base URL and a relative path with exactly one `/` between them.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
