//! # client
//!
//! Leptos + WASM frontend for the spaces listing page.
//!
//! This crate contains the app shell, the spaces page, its list components,
//! reactive page state, the REST call against the spaces API, and the API
//! configuration injected by the host at startup.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered body.
///
/// The API base URL is read back from the `<meta>` tag the server rendered,
/// so browser and server agree on the endpoint.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = config::ApiConfig::from_document();
    log::info!("hydrating spaces page against {}", config.base_url());

    leptos::mount::hydrate_body(move || view! { <App config=config.clone()/> });
}
