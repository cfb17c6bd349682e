//! Reachability probe for the spaces API.
//!
//! Issues the same `GET apiv1/spaces/` the page issues and only looks at the
//! status code; the body is not decoded.

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(u16),
}

/// `Ok(())` when `url` answers with a 2xx status.
pub async fn probe(http: &reqwest::Client, url: &str) -> Result<(), UpstreamError> {
    let response = http.get(url).send().await?;
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(UpstreamError::Status(status.as_u16()))
    }
}

#[cfg(test)]
#[path = "upstream_test.rs"]
mod tests;
