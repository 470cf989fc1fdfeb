use leptos::html::Section;
use leptos::prelude::*;

use crate::core::content::FEATURE_CARDS;
use crate::core::{LandingConfig, ThemeBucket};
use crate::ui::hooks::use_reveal_latch;
use crate::ui::theme::Palette;

/// Three-card feature grid; all cards reveal together, staggered by CSS delay
#[component]
pub fn Features(#[prop(into)] theme: Signal<ThemeBucket>, config: LandingConfig) -> impl IntoView {
    let section_ref = NodeRef::<Section>::new();
    let latch = use_reveal_latch(section_ref, FEATURE_CARDS.len(), config.observer_options());

    view! {
        <section node_ref=section_ref id="features" class="py-20 md:py-32 bg-white relative z-10">
            <div class="max-w-6xl mx-auto px-4 md:px-6">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-4">"Built for the way teams work"</h2>
                    <p class="text-lg text-gray-600 max-w-2xl mx-auto">
                        "Everything your team needs to move fast, stay aligned and scale."
                    </p>
                </div>

                <div class="grid md:grid-cols-3 gap-8">
                    {FEATURE_CARDS.iter().enumerate().map(|(index, card)| {
                        let card_class = move || {
                            let state = if latch.with(|l| l.is_visible(index)) {
                                "opacity-100 translate-y-0"
                            } else {
                                "opacity-0 translate-y-8"
                            };
                            format!("p-8 rounded-2xl border border-gray-200 bg-white hover:shadow-lg transition-all duration-700 {}", state)
                        };
                        view! {
                            <div class=card_class style:transition-delay=format!("{}ms", index * 100)>
                                <FeatureIcon name=card.icon theme=theme />
                                <h3 class="text-xl font-bold mb-3">{card.title}</h3>
                                <p class="text-gray-600 leading-relaxed">{card.description}</p>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Icon on a tile filled with the current bucket colour
#[component]
pub fn FeatureIcon(name: &'static str, #[prop(into)] theme: Signal<ThemeBucket>) -> impl IntoView {
    view! {
        <div
            class="w-14 h-14 mb-6 rounded-xl flex items-center justify-center transition-colors duration-500"
            style:background-color=move || Palette::for_bucket(theme.get()).icon
        >
            <img
                src=format!("/icons/{}.svg", name)
                class="w-7 h-7 brightness-0 invert"
                alt=""
                draggable=false
            />
        </div>
    }
}
