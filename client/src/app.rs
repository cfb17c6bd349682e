//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{ApiConfig, BASE_URL_META};
use crate::pages::spaces::SpacePage;
use crate::state::spaces::SpacesState;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `config` is written into a `<meta>` tag so the hydrating client uses the
/// same API base URL as the server render.
pub fn shell(options: LeptosOptions, config: ApiConfig) -> impl IntoView {
    let base_url = config.base_url().to_owned();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=BASE_URL_META content=base_url/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App config=config/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the API configuration and the shared spaces state, and sets up
/// client-side routing.
#[component]
pub fn App(config: ApiConfig) -> impl IntoView {
    provide_meta_context();

    let spaces = RwSignal::new(SpacesState::default());

    provide_context(config);
    provide_context(spaces);

    view! {
        <Stylesheet id="leptos" href="/pkg/spaces-web.css"/>
        <Title text="Spaces"/>

        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=SpacePage/>
                    <Route path=StaticSegment("spaces") view=SpacePage/>
                </Routes>
            </main>
        </Router>
    }
}
