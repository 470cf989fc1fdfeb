use leptos::html::Section;
use leptos::prelude::*;

use crate::core::content::{DEFAULT_PLAN, PLANS, Plan};
use crate::core::{LandingConfig, SelectionPolicy, TabSwitcher, ThemeBucket};
use crate::ui::hooks::use_reveal_latch;
use crate::ui::icon::{Icon, icons};
use crate::ui::theme::Palette;

/// Plan picker. Exactly one plan is selected at all times, starting with
/// the most popular one.
#[component]
pub fn Pricing(#[prop(into)] theme: Signal<ThemeBucket>, config: LandingConfig) -> impl IntoView {
    let section_ref = NodeRef::<Section>::new();
    let latch = use_reveal_latch(section_ref, PLANS.len(), config.observer_options());
    let plans = RwSignal::new(
        TabSwitcher::new(PLANS.to_vec(), SelectionPolicy::Manual).starting_at(DEFAULT_PLAN),
    );
    let palette = Memo::new(move |_| Palette::for_bucket(theme.get()));

    let selected_name = move || plans.with(|plans| plans.active().map(|plan| plan.name).unwrap_or_default());

    view! {
        <section node_ref=section_ref id="pricing" class="py-20 md:py-32 bg-gray-50">
            <div class="max-w-6xl mx-auto px-4 md:px-6">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-4">"Simple, transparent pricing"</h2>
                    <p class="text-lg text-gray-600 max-w-2xl mx-auto">
                        "Choose the perfect plan for your team, scale as you grow"
                    </p>
                </div>

                <div class="text-center mb-12">
                    <p class="text-sm text-gray-600">
                        "You selected: "
                        <span class="font-semibold text-gray-900">{selected_name}</span>
                    </p>
                </div>

                <div class="grid md:grid-cols-3 gap-8" role="radiogroup" aria-label="Plans">
                    {PLANS.iter().enumerate().map(|(index, plan)| {
                        let selected = Signal::derive(move || plans.with(|plans| plans.is_active(index)));
                        let visible = Signal::derive(move || latch.with(|l| l.is_visible(index)));
                        view! {
                            <PlanCard
                                plan=*plan
                                index=index
                                selected=selected
                                visible=visible
                                palette=palette
                                on_select=Callback::new(move |index: usize| {
                                    if !plans.with_untracked(|plans| plans.is_active(index)) {
                                        plans.update(|plans| {
                                            plans.select(index);
                                        });
                                    }
                                })
                            />
                        }
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PlanCard(
    plan: Plan,
    index: usize,
    #[prop(into)] selected: Signal<bool>,
    #[prop(into)] visible: Signal<bool>,
    #[prop(into)] palette: Signal<Palette>,
    on_select: Callback<usize>,
) -> impl IntoView {
    let card_class = move || {
        let selection = if selected.get() {
            format!("border-2 {} bg-white shadow-xl", palette.get().border)
        } else {
            "border-gray-200 bg-white".to_string()
        };
        let reveal = if visible.get() {
            "opacity-100 translate-y-0"
        } else {
            "opacity-0 translate-y-8"
        };
        format!(
            "relative p-8 rounded-2xl border transition-all duration-500 transform hover:scale-105 text-left focus:outline-none focus:ring-2 focus:ring-offset-2 {} {}",
            selection, reveal
        )
    };

    let badge_class = move || {
        format!(
            "absolute -top-4 left-1/2 -translate-x-1/2 px-4 py-1 rounded-full bg-gradient-to-r {} text-white text-sm font-semibold",
            palette.get().gradient()
        )
    };

    let cta_class = move || {
        if selected.get() {
            format!(
                "w-full px-6 py-3 rounded-lg font-semibold transition mb-8 text-center bg-gradient-to-r {} text-white shadow-lg",
                palette.get().gradient()
            )
        } else {
            "w-full px-6 py-3 rounded-lg font-semibold transition mb-8 text-center border-2 border-gray-200 text-gray-900 hover:bg-gray-50".to_string()
        }
    };

    let (price, cta) = match plan.price {
        Some(price) => (price, "Get Started"),
        None => ("Custom", "Contact Sales"),
    };

    view! {
        <button
            class=card_class
            style:transition-delay=format!("{}ms", index * 100)
            role="radio"
            aria-checked=move || selected.get()
            on:click=move |_| on_select.run(index)
        >
            // "Most Popular" yields to "Selected Plan" on the same card
            <Show when=move || plan.popular && !selected.get()>
                <div class=badge_class>"Most Popular"</div>
            </Show>
            <Show when=move || selected.get()>
                <div class=badge_class>"Selected Plan"</div>
            </Show>

            <h3 class="text-2xl font-bold mb-2">{plan.name}</h3>
            <p class="text-gray-600 text-sm mb-6">{plan.description}</p>

            <div class="mb-6">
                <p class="text-4xl font-bold">{price}</p>
                {(!plan.is_custom()).then(|| view! { <p class="text-gray-600 text-sm">"/month"</p> })}
            </div>

            <div class=cta_class>{cta}</div>

            <div class="space-y-4">
                {plan.features.iter().map(|feature| view! {
                    <div class="flex items-center gap-3">
                        <Icon name=icons::CHECK class="w-5 h-5" />
                        <span class="text-gray-700">{*feature}</span>
                    </div>
                }).collect_view()}
            </div>
        </button>
    }
}
