//! Card for a single space in the list.

#[cfg(test)]
#[path = "space_card_test.rs"]
mod space_card_test;

use leptos::prelude::*;

use crate::net::types::SpaceSummary;

/// A card showing the display fields of one space.
#[component]
pub fn SpaceCard(summary: SpaceSummary) -> impl IntoView {
    let name = summary.display_name().to_owned();
    let SpaceSummary { ro_profile, storage_path, url, type_iri, .. } = summary;

    view! {
        <div class="space-card">
            <span class="space-card__name">{name}</span>
            {ro_profile.map(|profile| view! { <span class="space-card__profile">{profile}</span> })}
            {storage_path.map(|path| view! { <span class="space-card__path">{path}</span> })}
            {type_iri.map(|iri| {
                let label = type_label(&iri).to_owned();
                view! { <span class="space-card__type" title=iri>{label}</span> }
            })}
            {url.map(|href| {
                view! {
                    <a class="space-card__link" href=href>
                        "Open"
                    </a>
                }
            })}
        </div>
    }
}

/// Short label for a type IRI: the part after the last `#` or `/`.
pub(crate) fn type_label(iri: &str) -> &str {
    iri.rsplit(['#', '/']).find(|part| !part.is_empty()).unwrap_or(iri)
}
