//! Simulated chat window inside the hero mockup
//!
//! Visitors can switch channels and post messages; everything lives in a
//! [`ChatSimulator`] owned by this component and disappears on reload.

use leptos::html::Div;
use leptos::prelude::*;

use crate::core::content::seed_channels;
use crate::core::{ChatMessage, ChatSimulator, MessageKind};
use crate::ui::common::{TabItem, Tabs};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn ChatMock() -> impl IntoView {
    let chat = RwSignal::new(ChatSimulator::new(seed_channels()));
    let (input_value, set_input_value) = signal(String::new());
    let pane_ref = NodeRef::<Div>::new();

    let channel_tabs: Vec<TabItem> = chat.with_untracked(|chat| {
        chat.channels()
            .iter()
            .map(|channel| TabItem::for_variant(channel).with_icon(icons::HASH))
            .collect()
    });

    let active_index = Signal::derive(move || chat.with(ChatSimulator::active_index));

    let on_channel = Callback::new(move |index: usize| {
        let key = chat.with_untracked(|chat| chat.channels().get(index).map(|c| c.key.clone()));
        if let Some(key) = key {
            chat.update(|chat| {
                chat.switch_channel(&key);
            });
        }
    });

    let send_message = move || {
        let text = input_value.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        let mut appended = false;
        chat.update(|chat| appended = chat.append_message(&text).is_some());
        if appended {
            set_input_value.set(String::new());
        }
    };

    // Keep the newest message in view by scrolling the pane itself; the
    // page around it must not move
    #[cfg(feature = "hydrate")]
    {
        Effect::new(move |_| {
            let _ = chat.with(|chat| (chat.active_index(), chat.messages().len()));
            if let Some(pane) = pane_ref.get_untracked() {
                request_animation_frame(move || pane.set_scroll_top(pane.scroll_height()));
            }
        });
    }

    view! {
        <div class="rounded-xl overflow-hidden shadow-2xl ring-1 ring-gray-200/50 bg-white">
            // Window chrome
            <div class="bg-gray-800 px-4 py-3 flex items-center gap-2">
                <div class="flex gap-2">
                    <div class="w-3 h-3 rounded-full bg-red-500"></div>
                    <div class="w-3 h-3 rounded-full bg-yellow-500"></div>
                    <div class="w-3 h-3 rounded-full bg-green-500"></div>
                </div>
                <div class="flex-1 text-center text-gray-400 text-xs font-mono">"Acme Inc"</div>
            </div>

            <div class="flex h-80 bg-white">
                // Channel sidebar
                <div class="w-28 bg-gradient-to-b from-purple-800 to-purple-900 px-2 py-3 flex flex-col gap-3">
                    <div class="w-8 h-8 bg-purple-600 rounded-lg flex items-center justify-center text-white text-xs font-bold">
                        "A"
                    </div>
                    <Tabs tabs=channel_tabs active=active_index on_change=on_channel />
                </div>

                <div class="flex-1 flex flex-col min-w-0">
                    <div class="border-b border-gray-200 px-4 py-3 flex items-center gap-2">
                        <span class="text-purple-600 font-bold">"#"</span>
                        <span class="font-semibold text-xs text-gray-900">
                            {move || chat.with(|chat| chat.active_channel().map(|c| c.name.clone()).unwrap_or_default())}
                        </span>
                    </div>

                    <div
                        node_ref=pane_ref
                        class="flex-1 p-4 flex flex-col gap-3 overflow-y-auto"
                        role="tabpanel"
                        id=move || format!("panel-{}", chat.with(|chat| chat.active_key().unwrap_or_default().to_string()))
                    >
                        <For
                            each=move || chat.with(|chat| chat.messages().to_vec())
                            key=|message| message.id
                            children=move |message| view! { <MessageRow message=message /> }
                        />
                    </div>

                    <div class="border-t border-gray-200 px-4 py-3">
                        <div class="flex items-center gap-2 px-3 py-2 bg-gray-100 rounded-lg">
                            <input
                                type="text"
                                placeholder="Message"
                                class="flex-1 bg-transparent text-xs placeholder-gray-500 outline-none"
                                prop:value=move || input_value.get()
                                on:input=move |e| set_input_value.set(event_target_value(&e))
                                on:keydown=move |e| {
                                    if e.key() == "Enter" {
                                        e.prevent_default();
                                        send_message();
                                    }
                                }
                            />
                            <button
                                class="p-1 rounded disabled:opacity-40"
                                disabled=move || input_value.get().trim().is_empty()
                                on:click=move |_| send_message()
                                aria-label="Send message"
                            >
                                <Icon name=icons::SEND class="w-3 h-3" />
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn MessageRow(message: ChatMessage) -> impl IntoView {
    let author = message.kind.author().to_string();
    let timestamp = message.timestamp.clone();

    let (avatar, body) = match &message.kind {
        MessageKind::Member { .. } => (
            "bg-gradient-to-br from-orange-400 to-orange-500",
            view! { <div class="text-xs text-gray-600 mt-1">{message.text.clone()}</div> }.into_any(),
        ),
        MessageKind::Calendar { title, starts_at } => (
            "bg-gradient-to-br from-blue-400 to-blue-500",
            view! {
                <div class="mt-1 rounded border-l-4 border-blue-400 bg-blue-50 px-2 py-1 text-xs">
                    <div class="font-semibold text-gray-900">{title.clone()}" · "{starts_at.clone()}</div>
                    <div class="text-gray-600">{message.text.clone()}</div>
                </div>
            }.into_any(),
        ),
        MessageKind::Huddle { participants } => (
            "bg-gradient-to-br from-green-400 to-emerald-500",
            view! {
                <div class="mt-1 inline-flex items-center gap-2 rounded-full bg-green-50 px-2 py-1 text-xs text-green-700">
                    <span class="inline-block w-2 h-2 rounded-full bg-green-500 animate-pulse"></span>
                    {message.text.clone()}
                    <span class="text-green-600">{format!("{} in call", participants)}</span>
                </div>
            }.into_any(),
        ),
        MessageKind::Ai => (
            "bg-gradient-to-br from-purple-400 to-pink-400",
            view! {
                <div class="mt-1 rounded bg-purple-50 px-2 py-1 text-xs text-gray-700">{message.text.clone()}</div>
            }.into_any(),
        ),
        MessageKind::Own => (
            "bg-gradient-to-br from-gray-600 to-gray-800",
            view! { <div class="text-xs text-gray-800 mt-1 break-words">{message.text.clone()}</div> }.into_any(),
        ),
    };

    view! {
        <div class="flex items-start gap-2">
            <div class=format!("w-6 h-6 rounded-full flex-shrink-0 {}", avatar)></div>
            <div class="flex-1 min-w-0">
                <div class="flex items-baseline gap-2">
                    <span class="text-xs font-semibold text-gray-900">{author}</span>
                    {timestamp.map(|time| view! { <span class="text-[10px] text-gray-400">{time}</span> })}
                </div>
                {body}
            </div>
        </div>
    }
}
