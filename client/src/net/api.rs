//! REST call for the spaces list.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`, cancellable through
//! an `AbortController` registered per request number.
//! Server-side (SSR): returns [`FetchError::NotAvailable`] since the list is
//! only fetched once the page is mounted in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure (transport, status, body) comes back as a [`FetchError`] so
//! the page can show it instead of dropping it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Space;

/// Why a spaces fetch produced no list.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("spaces request failed: {0}")]
    Status(u16),
    #[error("malformed spaces response: {0}")]
    Decode(String),
    #[error("not available on server")]
    NotAvailable,
}

#[cfg(feature = "hydrate")]
thread_local! {
    static IN_FLIGHT: std::cell::RefCell<std::collections::HashMap<u64, web_sys::AbortController>> =
        std::cell::RefCell::new(std::collections::HashMap::new());
}

/// Decode a response body into a space list. The body must be a JSON array;
/// its elements are kept verbatim.
#[cfg(any(test, feature = "hydrate"))]
fn decode_spaces(body: &str) -> Result<Vec<Space>, FetchError> {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Array(items)) => Ok(items),
        Ok(other) => Err(FetchError::Decode(format!("expected a JSON array, got {}", json_kind(&other)))),
        Err(e) => Err(FetchError::Decode(e.to_string())),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Fetch the space list from `url` (`GET`, no query, no body, no auth).
///
/// `request` identifies the call for [`abort_request`].
///
/// # Errors
///
/// Returns [`FetchError`] on transport failure, a non-2xx status, or a body
/// that is not a JSON array.
pub async fn fetch_spaces(url: &str, request: u64) -> Result<Vec<Space>, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let controller = web_sys::AbortController::new().ok();
        let signal = controller.as_ref().map(web_sys::AbortController::signal);
        if let Some(controller) = controller {
            IN_FLIGHT.with(|map| map.borrow_mut().insert(request, controller));
        }

        let result = async {
            let resp = gloo_net::http::Request::get(url)
                .abort_signal(signal.as_ref())
                .send()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(FetchError::Status(resp.status()));
            }
            let body = resp.text().await.map_err(|e| FetchError::Decode(e.to_string()))?;
            leptos::logging::log!("GET {url} -> {body}");
            decode_spaces(&body)
        }
        .await;

        IN_FLIGHT.with(|map| map.borrow_mut().remove(&request));
        result
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, request);
        Err(FetchError::NotAvailable)
    }
}

/// Abort the in-flight request `request`, if it is still running.
pub fn abort_request(request: u64) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(controller) = IN_FLIGHT.with(|map| map.borrow_mut().remove(&request)) {
            controller.abort();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
    }
}
