use leptos::html::Section;
use leptos::prelude::*;

use crate::core::content::{TESTIMONIALS, Testimonial};
use crate::core::{LandingConfig, ThemeBucket};
use crate::ui::hooks::use_reveal_latch;
use crate::ui::icon::{Icon, icons};
use crate::ui::theme::Palette;

const STAGGER_MS: usize = 150;

#[component]
pub fn Testimonials(#[prop(into)] theme: Signal<ThemeBucket>, config: LandingConfig) -> impl IntoView {
    let section_ref = NodeRef::<Section>::new();
    let latch = use_reveal_latch(section_ref, TESTIMONIALS.len(), config.observer_options());
    let avatar_gradient = move || Palette::for_bucket(theme.get()).gradient();

    view! {
        <section node_ref=section_ref id="testimonials" class="py-20 md:py-32 bg-white">
            <div class="max-w-6xl mx-auto px-4 md:px-6">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-4">"Loved by teams worldwide"</h2>
                    <p class="text-lg text-gray-600 max-w-2xl mx-auto">
                        "Join thousands of companies trusting Sync for their communication"
                    </p>
                </div>

                <div class="grid md:grid-cols-3 gap-8">
                    {TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| {
                        let visible = Signal::derive(move || latch.with(|l| l.is_visible(index)));
                        view! {
                            <TestimonialCard
                                testimonial=*testimonial
                                visible=visible
                                delay_ms=index * STAGGER_MS
                                avatar_gradient=Signal::derive(avatar_gradient)
                            />
                        }
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(
    testimonial: Testimonial,
    #[prop(into)] visible: Signal<bool>,
    delay_ms: usize,
    #[prop(into)] avatar_gradient: Signal<String>,
) -> impl IntoView {
    view! {
        <div
            class=move || format!(
                "p-8 bg-gray-50 rounded-2xl border border-gray-200 hover:shadow-lg transition-all duration-500 {}",
                if visible.get() { "opacity-100" } else { "opacity-0" }
            )
            style:transition-delay=format!("{}ms", delay_ms)
        >
            <div class="flex gap-1 mb-4" aria-label="5 out of 5 stars">
                {(0..5).map(|_| view! { <Icon name=icons::STAR class="w-4 h-4" /> }).collect_view()}
            </div>
            <p class="text-gray-700 mb-6 leading-relaxed">"\u{201c}"{testimonial.text}"\u{201d}"</p>
            <div class="flex items-center gap-3">
                <div class=move || format!(
                    "w-12 h-12 rounded-full bg-gradient-to-br {} flex items-center justify-center text-xl transition-colors duration-500",
                    avatar_gradient.get()
                )>
                    {testimonial.avatar}
                </div>
                <div>
                    <p class="font-semibold text-gray-900">{testimonial.name}</p>
                    <p class="text-sm text-gray-600">{testimonial.company}</p>
                </div>
            </div>
        </div>
    }
}
