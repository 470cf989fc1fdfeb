//! Landing page
//!
//! Owns the page-level scroll tracker and hands the derived theme bucket to
//! every section as a prop. Sections own their local state (reveal latches,
//! tab selection, the chat mock).

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::LandingConfig;
use crate::ui::hooks::use_scroll_state;
use crate::ui::landing::{
    FeatureShowcase, Features, Footer, Hero, Navbar, Pricing, Testimonials,
};

#[component]
pub fn LandingPage() -> impl IntoView {
    let config = use_context::<LandingConfig>().unwrap_or_default();
    let scroll = use_scroll_state(&config);
    let theme = Memo::new(move |_| scroll.get().bucket);

    view! {
        <SeoMeta />

        <main class="w-full overflow-x-hidden bg-white">
            <Navbar state=scroll />
            <Hero theme=theme config=config.clone() />
            <Features theme=theme config=config.clone() />
            <FeatureShowcase />
            <Testimonials theme=theme config=config.clone() />
            <Pricing theme=theme config=config />
            <Footer theme=theme />
        </main>
    }
}

#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Sync - Work with your colleagues and AI agents" />

        <Meta name="description" content="Sync brings people and information together. Channels, huddles and AI agents in one place." />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="Sync - Work with your colleagues and AI agents" />
        <Meta property="og:description" content="Channels, huddles and AI agents for teams of every size." />

        <Meta property="twitter:card" content="summary_large_image" />

        <Link rel="icon" href="/icons/zap.svg" />
    }
}
