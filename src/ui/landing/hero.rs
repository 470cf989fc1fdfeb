use leptos::prelude::*;

use super::background_blob::BackgroundBlob;
use super::chat_mock::ChatMock;
use crate::core::content::HERO_HEADING;
use crate::core::{LandingConfig, ThemeBucket};
use crate::ui::hooks::use_reveal_sequence;
use crate::ui::icon::{Icon, icons};
use crate::ui::theme::{Palette, reveal_class};

/// Hero section: heading fragments appear one per interval step, the subtext
/// and CTAs after a separate delay
#[component]
pub fn Hero(#[prop(into)] theme: Signal<ThemeBucket>, config: LandingConfig) -> impl IntoView {
    let sequence = use_reveal_sequence(&config, HERO_HEADING.len());
    let palette = Memo::new(move |_| Palette::for_bucket(theme.get()));

    // Badge and mockup fade in as soon as the sequence starts
    let started = move || sequence.with(|s| s.revealed() > 0 || s.subtext_visible());
    let subtext_visible = move || sequence.with(|s| s.subtext_visible());

    view! {
        <section class="relative w-full bg-white pt-24 pb-12 md:pt-32 md:pb-20 overflow-hidden">
            <BackgroundBlob theme=theme />

            <div class="max-w-6xl mx-auto px-4 md:px-6 relative z-10">
                <div class="grid md:grid-cols-2 gap-8 md:gap-12 items-center">
                    <div class="flex flex-col gap-6 md:gap-8">
                        <div class=move || reveal_class(
                            &format!(
                                "inline-flex items-center px-4 py-2 rounded-full border ring-4 {} bg-white/50 backdrop-blur w-fit gap-2 text-sm font-medium transition-all duration-700",
                                palette.get().ring
                            ),
                            started(),
                        )>
                            <span class="inline-block w-2 h-2 bg-current rounded-full animate-pulse"></span>
                            <span class="text-gray-700">"New AI Features"</span>
                        </div>

                        <h1 class="text-4xl md:text-5xl lg:text-6xl font-bold leading-tight text-gray-900 min-h-[120px] md:min-h-[140px]">
                            {HERO_HEADING.iter().enumerate().map(|(index, fragment)| view! {
                                <span class=move || reveal_class(
                                    "inline-block mr-2 transition-all duration-500",
                                    sequence.with(|s| s.is_revealed(index)),
                                )>
                                    {*fragment}
                                </span>
                            }).collect_view()}
                        </h1>

                        <p class=move || reveal_class(
                            "text-lg md:text-xl text-gray-600 leading-relaxed max-w-lg transition-all duration-1000",
                            subtext_visible(),
                        )>
                            "Sync brings people and information together. Type things out. Talk things through. \
                             Invite external organisations into the conversation. And get work done with AI agents."
                        </p>

                        <div class=move || reveal_class(
                            "flex items-baseline gap-3 py-6 border-t border-gray-200 transition-all duration-1000 delay-300",
                            subtext_visible(),
                        )>
                            <span class=move || format!(
                                "text-4xl md:text-5xl font-bold bg-gradient-to-r {} bg-clip-text text-transparent",
                                palette.get().gradient()
                            )>
                                "80%"
                            </span>
                            <span class="text-gray-600 text-sm md:text-base">
                                "of Fortune 100 companies use Sync Connect to work with partners and customers"
                            </span>
                        </div>

                        <div class=move || reveal_class(
                            "flex flex-col sm:flex-row gap-4 pt-4 transition-all duration-1000 delay-500",
                            subtext_visible(),
                        )>
                            <button class=move || format!(
                                "px-7 py-3 rounded-lg bg-gradient-to-r {} text-white font-semibold hover:shadow-lg transition transform hover:scale-105",
                                palette.get().gradient()
                            )>
                                "GET STARTED"
                            </button>
                            <a
                                href="#pricing"
                                class="px-7 py-3 rounded-lg border-2 border-gray-300 text-gray-900 font-semibold hover:bg-gray-50 transition flex items-center justify-center gap-2"
                            >
                                "FIND YOUR PLAN"
                                <Icon name=icons::ARROW_RIGHT class="w-4 h-4" />
                            </a>
                        </div>
                    </div>

                    // Product mockup with the simulated chat
                    <div class=move || reveal_class(
                        "relative h-[420px] md:h-[500px] flex items-center justify-center transition-all duration-1000 delay-200",
                        started(),
                    )>
                        <div
                            class="absolute inset-0 rounded-full pointer-events-none transition-all duration-500"
                            style:background=move || format!(
                                "radial-gradient(circle at center, {} 0%, transparent 70%)",
                                palette.get().glow
                            )
                            aria-hidden="true"
                        ></div>
                        <div class="relative z-10 w-full max-w-md">
                            <ChatMock />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
