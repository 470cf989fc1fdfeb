use leptos::prelude::*;

use crate::core::ThemeBucket;
use crate::ui::theme::Palette;

const LINK_COLUMNS: [(&str, [&str; 4]); 3] = [
    ("Product", ["Features", "Pricing", "Security", "Roadmap"]),
    ("Company", ["About", "Blog", "Careers", "Contact"]),
    ("Legal", ["Privacy", "Terms", "Cookies", "DPA"]),
];

const SOCIAL_LINKS: [&str; 3] = ["Twitter", "LinkedIn", "Email"];

#[component]
pub fn Footer(#[prop(into)] theme: Signal<ThemeBucket>) -> impl IntoView {
    let brand_class = move || {
        format!(
            "text-2xl font-bold mb-4 transition-colors duration-500 {}",
            Palette::for_bucket(theme.get()).text
        )
    };

    view! {
        <footer class="bg-gray-900 text-gray-300">
            <div class="max-w-6xl mx-auto px-4 md:px-6 py-16">
                <div class="grid md:grid-cols-5 gap-8 mb-12">
                    <div>
                        <div class=brand_class>"Sync"</div>
                        <p class="text-sm text-gray-400">"Seamless team communication for the modern world."</p>
                    </div>

                    {LINK_COLUMNS.iter().map(|(heading, links)| view! {
                        <div>
                            <h4 class="font-semibold text-white mb-4">{*heading}</h4>
                            <ul class="space-y-2 text-sm">
                                {links.iter().map(|link| view! {
                                    <li><a href="#" class="hover:text-white transition">{*link}</a></li>
                                }).collect_view()}
                            </ul>
                        </div>
                    }).collect_view()}

                    <div>
                        <h4 class="font-semibold text-white mb-4">"Connect"</h4>
                        <div class="flex flex-col gap-2 text-sm">
                            {SOCIAL_LINKS.iter().map(|link| view! {
                                <a href="#" class="hover:text-white transition">{*link}</a>
                            }).collect_view()}
                        </div>
                    </div>
                </div>

                <div class="border-t border-gray-800 pt-8 flex flex-col md:flex-row items-center justify-between gap-4">
                    <p class="text-sm text-gray-400">"© 2025 Sync. All rights reserved."</p>
                    <div class="flex gap-4 text-sm">
                        <a href="#" class="hover:text-white transition">"Status"</a>
                        <a href="#" class="hover:text-white transition">"Sitemap"</a>
                        <a href="#" class="hover:text-white transition">"Accessibility"</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
