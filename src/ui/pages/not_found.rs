//! 404 page for any path other than the landing page

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Page not found - Sync" />

        <div class="min-h-screen bg-white flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-purple-50 rounded-full flex items-center justify-center">
                    <Icon name=icons::HASH class="w-12 h-12 opacity-40" />
                </div>

                <h1 class="text-6xl font-bold text-gray-900 mb-4">"404"</h1>
                <h2 class="text-2xl font-semibold text-gray-900 mb-2">"Page Not Found"</h2>
                <p class="text-gray-600 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A
                    href="/"
                    attr:class="px-6 py-3 bg-purple-600 hover:bg-purple-700 text-white font-medium rounded-lg transition-colors"
                >
                    "Back to Sync"
                </A>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-gray-400">"© 2025 Sync"</p>
            </div>
        </div>
    }
}
