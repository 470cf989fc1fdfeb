use leptos::prelude::*;

use crate::core::ThemeBucket;
use crate::ui::theme::Palette;

/// Blurred glow layers behind the hero that follow the theme bucket
#[component]
pub fn BackgroundBlob(#[prop(into)] theme: Signal<ThemeBucket>) -> impl IntoView {
    let glow = move || Palette::for_bucket(theme.get()).glow;
    let transition = "all 1s cubic-bezier(0.4, 0, 0.2, 1)";

    view! {
        <div
            class="fixed -right-40 top-32 w-[600px] h-[600px] pointer-events-none z-0"
            style:background=move || format!("radial-gradient(circle at center, {} 0%, transparent 70%)", glow())
            style:filter="blur(80px)"
            style:transition=transition
            aria-hidden="true"
        ></div>
        <div
            class="fixed -right-32 top-40 w-[500px] h-[500px] rounded-full pointer-events-none z-0"
            style:background=move || format!("radial-gradient(circle at center, {} 0%, transparent 60%)", glow())
            style:filter="blur(100px)"
            style:transition=transition
            aria-hidden="true"
        ></div>
        <div
            class="fixed -right-48 top-20 w-[700px] h-[700px] rounded-full pointer-events-none z-0"
            style:background=move || format!("linear-gradient(135deg, {} 0%, transparent 50%)", glow())
            style:filter="blur(120px)"
            style:opacity="0.6"
            style:transition=transition
            aria-hidden="true"
        ></div>
    }
}
