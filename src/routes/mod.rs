//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the host's own endpoints (health, readiness, config)
//! with Leptos SSR rendering of the spaces page under a single Axum router.
//! The spaces API itself is a separate service; the page calls it directly
//! from the browser.

pub mod health;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

use std::path::PathBuf;

use axum::Router;
use axum::extract::{Json, State};
use axum::routing::get;
use client::app::{App, shell};
use client::config::ApiConfig;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ServerError;
use crate::state::AppState;

/// Host endpoints that do not go through Leptos.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/healthz", get(health::healthz))
        .route("/readyz", get(health::readyz))
        .route("/api/config", get(api_config))
        .layer(cors)
        .with_state(state)
}

/// `GET /api/config`: the API configuration the page is rendered with.
async fn api_config(State(state): State<AppState>) -> Json<ApiConfig> {
    Json(state.config.api.clone())
}

/// Full app: host endpoints + Leptos SSR routes + `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let api = state.config.api.clone();

    let routes = generate_route_list({
        let api = api.clone();
        move || view! { <App config=api.clone()/> }
    });

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone(), api.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}
