//! List view for the spaces page.
//!
//! DESIGN
//! ======
//! The view takes the list as a signal and derives its rows on every change,
//! so it always draws the page's current list rather than a copy captured at
//! first render.

#[cfg(test)]
#[path = "spaces_view_test.rs"]
mod spaces_view_test;

use leptos::prelude::*;

use crate::components::space_card::SpaceCard;
use crate::net::types::{Space, SpaceSummary};

/// Renders one card per space, or an empty-state line.
#[component]
pub fn SpacesView(#[prop(into)] spaces: Signal<Vec<Space>>) -> impl IntoView {
    view! {
        <div class="spaces-view">
            <Show
                when=move || spaces.with(|list| !list.is_empty())
                fallback=|| view! { <p class="spaces-view__empty">"No spaces yet."</p> }
            >
                {move || {
                    space_rows(&spaces.get())
                        .into_iter()
                        .map(|summary| view! { <SpaceCard summary=summary/> })
                        .collect::<Vec<_>>()
                }}
            </Show>
        </div>
    }
}

/// Display rows for `spaces`, in list order.
pub(crate) fn space_rows(spaces: &[Space]) -> Vec<SpaceSummary> {
    spaces.iter().map(SpaceSummary::from_space).collect()
}
