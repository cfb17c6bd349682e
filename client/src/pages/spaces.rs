//! Spaces page: fetches the space list once on mount and renders it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing route of the app. Reads [`ApiConfig`] and the shared
//! [`SpacesState`] signal from context, issues one `GET apiv1/spaces/` when
//! mounted in the browser, and hands the current list to [`SpacesView`].
//!
//! Teardown aborts the in-flight request and the completion handler checks a
//! liveness flag, so nothing is written to state after the page is gone.

#[cfg(test)]
#[path = "spaces_test.rs"]
mod spaces_test;

use leptos::prelude::*;

use crate::components::spaces_view::SpacesView;
use crate::config::ApiConfig;
use crate::net::types::Space;
use crate::state::spaces::SpacesState;

/// A fetch recorded in state and ready to send.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PendingFetch {
    pub request: u64,
    pub url: String,
}

/// Spaces page: heading, add-space affordance, list view, refresh readout.
#[component]
pub fn SpacePage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let spaces = expect_context::<RwSignal<SpacesState>>();

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        if let Some(pending) = spaces.try_update(|s| begin_spaces_fetch(s, &config)) {
            let request = pending.request;
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::fetch_spaces(&pending.url, request).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                if let Err(e) = &outcome {
                    leptos::logging::warn!("spaces fetch {request} failed: {e}");
                }
                spaces.try_update(|s| s.apply_outcome(request, outcome));
            });
            on_cleanup(move || {
                alive.store(false, std::sync::atomic::Ordering::Relaxed);
                crate::net::api::abort_request(request);
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = config;

    let items = list_signal(spaces);

    view! {
        <div class="spaces-page">
            <header class="spaces-page__header">
                <h1 class="spaces-page__title">"Spaces"</h1>
                <h5 class="spaces-page__subtitle">"All spaces"</h5>
                // No create flow exists yet; the button is presentational only.
                <button class="btn btn--primary spaces-page__add" type="button">
                    <span class="spaces-page__add-icon" aria-hidden="true">
                        "+"
                    </span>
                    " Add space"
                </button>
            </header>

            <Show when=move || spaces.with(SpacesState::is_loading)>
                <p class="spaces-page__loading">"Loading spaces..."</p>
            </Show>
            <Show when=move || spaces.with(|s| s.error_message().is_some())>
                <p class="spaces-page__error">{move || spaces.with(SpacesState::error_message).unwrap_or_default()}</p>
            </Show>

            <div class="spaces-page__list">
                <SpacesView spaces=items/>
            </div>
            <div class="spaces-page__counter">{move || refresh_readout(spaces.with(|s| s.refresh_count))}</div>
        </div>
    }
}

/// Record a new fetch in `state` and return what to send.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn begin_spaces_fetch(state: &mut SpacesState, config: &ApiConfig) -> PendingFetch {
    PendingFetch { request: state.begin_fetch(), url: config.spaces_url() }
}

/// The current list, tracked from the page state.
pub(crate) fn list_signal(spaces: RwSignal<SpacesState>) -> Signal<Vec<Space>> {
    Signal::derive(move || spaces.with(|s| s.items.clone()))
}

fn refresh_readout(count: u64) -> String {
    format!("Number of changes to page: {count}")
}
