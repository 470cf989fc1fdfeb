//! Sticky feature showcase
//!
//! Five full-height text sections scroll past a sticky graphic pane. The
//! section crossing the vertical centre of the viewport becomes active and
//! the graphic follows it; the progress dots also accept clicks.

use leptos::html::Div;
use leptos::prelude::*;

use crate::core::content::{SHOWCASE_FEATURES, ShowcaseFeature};
use crate::core::{ActiveSectionTracker, SelectionPolicy, TabSwitcher};
use crate::ui::hooks::use_center_line;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn FeatureShowcase() -> impl IntoView {
    let tabs = RwSignal::new(TabSwitcher::new(
        SHOWCASE_FEATURES.to_vec(),
        SelectionPolicy::FollowViewport,
    ));
    let tracker = StoredValue::new(ActiveSectionTracker::new(SHOWCASE_FEATURES.len()));
    let active = Signal::derive(move || tabs.with(TabSwitcher::active_index));

    let on_center = Callback::new(move |index: usize| {
        let entered = tracker.try_update_value(|tracker| tracker.on_center_entered(index)).flatten();
        let Some(index) = entered else {
            return;
        };
        if !tabs.with_untracked(|tabs| tabs.is_active(index)) {
            tabs.update(|tabs| {
                tabs.observe(index);
            });
        }
    });

    let section_refs: Vec<NodeRef<Div>> = SHOWCASE_FEATURES.iter().map(|_| NodeRef::new()).collect();
    let scroll_targets = section_refs.clone();

    let on_select = Callback::new(move |index: usize| {
        let mut changed = false;
        tabs.update(|tabs| changed = tabs.select(index));
        if changed {
            scroll_to_section(scroll_targets.get(index).copied());
        }
    });

    view! {
        <section class="relative w-full bg-white">
            <div class="w-full mx-auto max-w-7xl flex">
                // Text column
                <div class="w-full lg:w-1/2 flex flex-col">
                    {SHOWCASE_FEATURES.iter().zip(section_refs).enumerate().map(|(index, (feature, target))| view! {
                        <FeatureSection
                            index=index
                            feature=*feature
                            target=target
                            active=active
                            on_center=on_center
                        />
                    }).collect_view()}
                </div>

                // Sticky graphic
                <div class="hidden lg:flex lg:w-1/2 items-center justify-center sticky top-0 h-screen overflow-hidden">
                    {move || {
                        let feature = tabs.with(|tabs| tabs.active().copied());
                        feature.map(|feature| view! { <FeatureGraphic feature=feature /> })
                    }}
                    <ProgressIndicator active=active on_select=on_select />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureSection(
    index: usize,
    feature: ShowcaseFeature,
    target: NodeRef<Div>,
    #[prop(into)] active: Signal<usize>,
    on_center: Callback<usize>,
) -> impl IntoView {
    use_center_line(target, Callback::new(move |_| on_center.run(index)));

    let is_active = move || active.get() == index;
    let gradient = feature.accent;

    view! {
        <div node_ref=target class="min-h-screen w-full flex flex-col justify-center px-6 md:px-12 lg:px-16 py-20">
            <div class=move || {
                if is_active() {
                    "max-w-md transition-all duration-700 opacity-100 translate-y-0"
                } else {
                    "max-w-md transition-all duration-700 opacity-40 translate-y-5"
                }
            }>
                <div class=move || {
                    if is_active() {
                        format!("mb-6 p-4 w-fit rounded-xl transition-all duration-500 scale-110 shadow-lg bg-gradient-to-br {}", gradient)
                    } else {
                        "mb-6 p-4 w-fit rounded-xl transition-all duration-500 bg-gray-100 opacity-60".to_string()
                    }
                }>
                    <img
                        src=format!("/icons/{}.svg", feature.icon)
                        class=move || if is_active() { "w-8 h-8 brightness-0 invert" } else { "w-8 h-8 opacity-50" }
                        alt=""
                    />
                </div>

                <h3 class=move || {
                    if is_active() {
                        "text-4xl md:text-5xl font-bold mb-6 leading-tight transition-colors duration-500 text-gray-900"
                    } else {
                        "text-4xl md:text-5xl font-bold mb-6 leading-tight transition-colors duration-500 text-gray-300"
                    }
                }>
                    {feature.title}
                </h3>

                <p class=move || {
                    if is_active() {
                        "text-lg leading-relaxed transition-all duration-500 text-gray-600"
                    } else {
                        "text-lg leading-relaxed transition-all duration-500 text-gray-400 opacity-50"
                    }
                }>
                    {feature.description}
                </p>

                <button
                    class=move || {
                        if is_active() {
                            format!("mt-8 px-6 py-3 rounded-lg font-semibold inline-flex items-center gap-2 transition-all duration-500 bg-gradient-to-r {} text-white shadow-lg hover:shadow-xl", gradient)
                        } else {
                            "mt-8 px-6 py-3 rounded-lg font-semibold inline-flex items-center gap-2 transition-all duration-500 bg-gray-200 text-gray-500 opacity-50 cursor-not-allowed".to_string()
                        }
                    }
                    disabled=move || !is_active()
                >
                    "Learn More"
                    <Icon name=icons::ARROW_RIGHT class="w-4 h-4" />
                </button>
            </div>
        </div>
    }
}

#[component]
fn FeatureGraphic(feature: ShowcaseFeature) -> impl IntoView {
    view! {
        <div class="px-8 animate-fade-in">
            <div class="relative">
                <div
                    class=format!("absolute inset-0 blur-3xl opacity-50 rounded-3xl bg-gradient-to-br {}", feature.backdrop)
                    aria-hidden="true"
                ></div>
                <div class=format!(
                    "relative rounded-3xl overflow-hidden shadow-2xl aspect-square w-96 max-w-md p-12 flex flex-col items-center justify-center gap-6 border border-white/10 bg-gradient-to-br {}",
                    feature.backdrop
                )>
                    <div class="w-32 h-32 bg-white/20 rounded-full flex items-center justify-center">
                        <img src=format!("/icons/{}.svg", feature.icon) class="w-16 h-16 brightness-0 invert" alt="" />
                    </div>
                    <div class="text-center">
                        <p class="text-white text-xl font-bold">{feature.graphic_title}</p>
                        <p class="text-white/70 text-sm mt-2">{feature.graphic_caption}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Dots below the graphic: passed sections are filled, the current one is dark
#[component]
fn ProgressIndicator(#[prop(into)] active: Signal<usize>, on_select: Callback<usize>) -> impl IntoView {
    view! {
        <div class="absolute bottom-8 left-1/2 -translate-x-1/2 flex gap-2" role="tablist">
            {SHOWCASE_FEATURES.iter().enumerate().map(|(index, feature)| view! {
                <button
                    class=move || {
                        let current = active.get();
                        let state = if index == current {
                            "w-8 bg-gray-800"
                        } else if index < current {
                            "w-8 bg-gray-300"
                        } else {
                            "w-2 bg-gray-200"
                        };
                        format!("h-1 rounded-full transition-all duration-300 {}", state)
                    }
                    role="tab"
                    aria-selected=move || active.get() == index
                    aria-label=feature.title
                    on:click=move |_| on_select.run(index)
                ></button>
            }).collect_view()}
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn scroll_to_section(target: Option<NodeRef<Div>>) {
    let Some(element) = target.and_then(|node_ref| node_ref.get_untracked()) else {
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Center);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[cfg(not(feature = "hydrate"))]
fn scroll_to_section(_target: Option<NodeRef<Div>>) {}
