use leptos::prelude::*;

use crate::core::Variant;

/// Tab item definition
#[derive(Clone, PartialEq)]
pub struct TabItem {
    /// Key of the variant this tab selects
    pub id: String,
    /// Display label for the tab
    pub label: String,
    /// Optional icon name
    pub icon: Option<&'static str>,
}

impl TabItem {
    /// Create a new tab item
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
        }
    }

    /// Tab for any keyed variant, labelled with its key
    pub fn for_variant(variant: &impl Variant) -> Self {
        Self::new(variant.key(), variant.key())
    }

    /// Add an icon to the tab
    pub fn with_icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// Vertical or horizontal list of mutually exclusive tabs.
///
/// Selection state lives with the caller (usually a `TabSwitcher` in a
/// signal); this component only renders it and reports clicks by index.
#[component]
pub fn Tabs(
    /// List of tab items
    tabs: Vec<TabItem>,
    /// Index of the active tab
    #[prop(into)]
    active: Signal<usize>,
    /// Callback when a tab is clicked
    on_change: Callback<usize>,
    /// Additional CSS classes for the container
    #[prop(default = String::new())]
    class: String,
    /// Classes applied to the active tab
    #[prop(default = "bg-white/20 text-white")]
    active_class: &'static str,
) -> impl IntoView {
    let container_class = if class.is_empty() {
        "flex flex-col gap-1".to_string()
    } else {
        format!("flex flex-col gap-1 {}", class)
    };

    view! {
        <div class=container_class role="tablist">
            {tabs.into_iter().enumerate().map(|(index, tab)| {
                let is_active = Signal::derive(move || active.get() == index);

                let tab_class = move || {
                    if is_active.get() {
                        format!("flex items-center gap-1 px-2 py-1 rounded text-xs text-left transition {}", active_class)
                    } else {
                        "flex items-center gap-1 px-2 py-1 rounded text-xs text-left text-white/60 hover:text-white transition".to_string()
                    }
                };

                view! {
                    <button
                        class=tab_class
                        on:click=move |_| on_change.run(index)
                        role="tab"
                        aria-selected=move || is_active.get()
                        aria-controls=format!("panel-{}", tab.id)
                    >
                        {tab.icon.map(|icon| {
                            view! {
                                <img src=format!("/icons/{}.svg", icon) class="w-3 h-3 invert" alt="" />
                            }
                        })}
                        <span class="truncate">{tab.label}</span>
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
