use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::LandingConfig;
use crate::core::config::CONFIG_ELEMENT_ID;
use crate::ui::{LandingPage, NotFoundPage};

/// Server-side document. The landing config provided to the render context
/// is embedded as JSON so the client picks up the same breakpoints and
/// timings.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let config = use_context::<LandingConfig>().unwrap_or_default();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script type="application/json" id=CONFIG_ELEMENT_ID inner_html=config.to_json()></script>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(load_config());

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/sync_landing.css"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=LandingPage />
            </Routes>
        </Router>
    }
}

/// Config embedded by the server, or defaults when it is missing or invalid
#[cfg(feature = "hydrate")]
fn load_config() -> LandingConfig {
    let embedded = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match embedded.as_deref().map(LandingConfig::from_json) {
        Some(Ok(config)) => config,
        Some(Err(err)) => {
            leptos::logging::warn!("Ignoring embedded landing config: {}", err);
            LandingConfig::default()
        }
        None => LandingConfig::default(),
    }
}

#[cfg(not(feature = "hydrate"))]
fn load_config() -> LandingConfig {
    use_context::<LandingConfig>().unwrap_or_default()
}
