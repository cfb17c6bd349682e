//! Liveness and readiness probes.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::state::AppState;
use crate::upstream::{self, UpstreamError};

/// `GET /healthz`: the process is up.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// `GET /readyz`: the spaces API the page depends on is answering.
pub async fn readyz(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let url = state.config.api.spaces_url();
    let result = upstream::probe(&state.http, &url).await;
    if let Err(e) = &result {
        tracing::warn!(%url, error = %e, "spaces API not ready");
    }
    let (status, body) = readiness(&result);
    (status, Json(body))
}

pub(crate) fn readiness(result: &Result<(), UpstreamError>) -> (StatusCode, Value) {
    match result {
        Ok(()) => (StatusCode::OK, json!({ "upstream": "ok" })),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            json!({ "upstream": "unavailable", "error": e.to_string() }),
        ),
    }
}

#[cfg(test)]
#[path = "health_test.rs"]
mod tests;
