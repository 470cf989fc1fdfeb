use leptos::prelude::*;

use crate::core::ScrollState;
use crate::ui::icon::{Icon, icons};
use crate::ui::theme::Palette;

const NAV_LINKS: [(&str, &str); 4] = [
    ("Product", "#features"),
    ("Customers", "#testimonials"),
    ("Pricing", "#pricing"),
    ("Resources", "#"),
];

/// Top navigation; floats with rounded corners once the page scrolls
#[component]
pub fn Navbar(#[prop(into)] state: Signal<ScrollState>) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let palette = Memo::new(move |_| Palette::for_bucket(state.get().bucket));

    let nav_class = move || {
        if state.get().is_scrolled {
            "fixed top-0 left-0 right-0 z-50 transition-all duration-300 mx-4 mt-4 rounded-2xl bg-white shadow-lg border border-gray-200 md:mx-6"
        } else {
            "fixed top-0 left-0 right-0 z-50 transition-all duration-300 w-full bg-white border-b border-gray-100"
        }
    };

    let cta_class = move |extra: &'static str| {
        move || {
            format!(
                "{} rounded-lg text-white font-medium text-sm transition {}",
                extra,
                palette.get().button
            )
        }
    };

    view! {
        <nav class=nav_class>
            <div class="max-w-7xl mx-auto px-4 md:px-6 py-4 flex items-center justify-between">
                // Logo
                <a href="#" class="flex items-center gap-2">
                    <div class="w-8 h-8 bg-gradient-to-br from-purple-500 to-cyan-500 rounded-lg flex items-center justify-center">
                        <span class="text-white font-bold text-lg">"◆"</span>
                    </div>
                    <span class="font-bold text-xl hidden sm:inline">"Sync"</span>
                </a>

                // Desktop links
                <div class="hidden md:flex items-center gap-8">
                    {NAV_LINKS.iter().map(|(label, href)| view! {
                        <a href=*href class="text-gray-600 hover:text-gray-900 transition font-medium text-sm">
                            {*label}
                        </a>
                    }).collect_view()}
                </div>

                // Desktop CTAs
                <div class="hidden md:flex items-center gap-3">
                    <button class="px-4 py-2 text-gray-600 hover:text-gray-900 transition font-medium text-sm">
                        "Sign in"
                    </button>
                    <button class="px-4 py-2 border border-gray-300 rounded-lg hover:bg-gray-50 transition font-medium text-sm">
                        "TALK TO SALES"
                    </button>
                    <button class=cta_class("px-6 py-2")>"GET STARTED"</button>
                </div>

                // Mobile menu toggle
                <button
                    class="md:hidden p-2 hover:bg-gray-100 rounded-lg transition"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get()
                >
                    {move || if menu_open.get() {
                        view! { <Icon name=icons::X class="w-6 h-6" /> }.into_any()
                    } else {
                        view! { <Icon name=icons::MENU class="w-6 h-6" /> }.into_any()
                    }}
                </button>
            </div>

            // Mobile menu
            <Show when=move || menu_open.get()>
                <div class="md:hidden bg-white border-t border-gray-200">
                    <div class="px-4 py-4 flex flex-col gap-4">
                        {NAV_LINKS.iter().map(|(label, href)| view! {
                            <a
                                href=*href
                                class="text-gray-600 hover:text-gray-900 font-medium"
                                on:click=move |_| set_menu_open.set(false)
                            >
                                {*label}
                            </a>
                        }).collect_view()}
                        <button class="text-gray-600 hover:text-gray-900 text-left font-medium">"Sign in"</button>
                        <button class="w-full px-4 py-2 border border-gray-300 rounded-lg hover:bg-gray-50 transition font-medium text-sm">
                            "TALK TO SALES"
                        </button>
                        <button class=cta_class("w-full px-4 py-2")>"GET STARTED"</button>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
