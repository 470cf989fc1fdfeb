//! Browser bindings for the state engine
//!
//! Each hook owns one engine value in a signal and feeds it from DOM events.
//! Registrations are released when the owning component is disposed: window
//! listeners through `on_cleanup`, observers and timers through a
//! [`Teardown`](crate::core::Teardown) held by an effect, and every callback
//! checks a [`Liveness`] flag first. Without the `hydrate` feature (server
//! render) the hooks return the initial state untouched.

use leptos::html::{Div, Section};
use leptos::prelude::*;

use crate::core::{
    LandingConfig, Liveness, ObserverOptions, RevealLatch, RevealSequencer, ScrollState,
};

#[cfg(feature = "hydrate")]
use crate::core::{ScrollSample, Teardown};

/// Track page scroll and publish the derived [`ScrollState`]
pub fn use_scroll_state(config: &LandingConfig) -> ReadSignal<ScrollState> {
    let tracker = config.scroll_tracker();
    let (state, set_state) = signal(tracker.state());

    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        let tracker = Rc::new(RefCell::new(tracker));
        let publish = move || {
            let Some(sample) = read_scroll_sample() else {
                return;
            };
            if let Some(next) = tracker.borrow_mut().sample(sample) {
                set_state.set(next);
            }
        };

        // Sync once after mount in case the page was restored mid-scroll
        let initial = publish.clone();
        Effect::new(move |_| initial());

        let on_resize = publish.clone();
        let scroll_handle = window_event_listener(leptos::ev::scroll, move |_| publish());
        let resize_handle = window_event_listener(leptos::ev::resize, move |_| on_resize());

        on_cleanup(move || {
            drop(scroll_handle);
            drop(resize_handle);
        });
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (tracker, set_state);
    }

    state
}

/// Latch a group of items visible the first time `section` crosses the
/// configured threshold
pub fn use_reveal_latch(
    section: NodeRef<Section>,
    len: usize,
    options: ObserverOptions,
) -> ReadSignal<RevealLatch> {
    let (latch, set_latch) = signal(RevealLatch::new(len));
    let liveness = Liveness::new();

    #[cfg(feature = "hydrate")]
    {
        let callback_liveness = liveness.clone();
        Effect::new(move |previous: Option<Option<Teardown>>| {
            // A remount replaces (and releases) the old registration
            drop(previous);
            let element = section.get()?;
            let inside_options = options.clone();
            observe_element(
                element.into(),
                &options,
                callback_liveness.clone(),
                move |ratio, intersecting| {
                    if !inside_options.is_inside(ratio, intersecting) {
                        return;
                    }
                    // Skip the signal write entirely once latched
                    if latch.with_untracked(RevealLatch::is_triggered) {
                        return;
                    }
                    set_latch.update(|latch| {
                        latch.observe(true);
                    });
                },
            )
        });
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (section, options, set_latch);
    }

    let cleanup_liveness = liveness;
    on_cleanup(move || cleanup_liveness.revoke());
    latch
}

/// Call `on_enter` whenever `target` crosses the horizontal centre line of
/// the viewport
pub fn use_center_line(target: NodeRef<Div>, on_enter: Callback<()>) {
    let liveness = Liveness::new();

    #[cfg(feature = "hydrate")]
    {
        let callback_liveness = liveness.clone();
        let options = ObserverOptions::center_line();
        Effect::new(move |previous: Option<Option<Teardown>>| {
            drop(previous);
            let element = target.get()?;
            let inside_options = options.clone();
            observe_element(
                element.into(),
                &options,
                callback_liveness.clone(),
                move |ratio, intersecting| {
                    if inside_options.is_inside(ratio, intersecting) {
                        on_enter.run(());
                    }
                },
            )
        });
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (target, on_enter);
    }

    let cleanup_liveness = liveness;
    on_cleanup(move || cleanup_liveness.revoke());
}

/// Run a [`RevealSequencer`] off an interval (one step per tick) and a
/// one-shot subtext timeout
pub fn use_reveal_sequence(config: &LandingConfig, len: usize) -> ReadSignal<RevealSequencer> {
    let sequencer = config.reveal_sequencer(len);
    let (state, set_state) = signal(sequencer);
    let liveness = Liveness::new();

    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use gloo_timers::callback::{Interval, Timeout};

        let step_ms = u32::try_from(config.reveal_step_ms).unwrap_or(u32::MAX);
        let subtext_ms = u32::try_from(config.subtext_delay_ms).unwrap_or(u32::MAX);
        let timer_liveness = liveness.clone();

        Effect::new(move |previous: Option<Teardown>| {
            if let Some(teardown) = previous {
                return teardown;
            }

            // The interval stops itself after the last fragment; the slot
            // is shared with the teardown for an early unmount
            let slot: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
            let tick_slot = Rc::clone(&slot);
            let tick_liveness = timer_liveness.clone();
            let interval = Interval::new(step_ms, move || {
                let complete = tick_liveness.guard(|| {
                    if !state.with_untracked(RevealSequencer::is_complete) {
                        set_state.update(|sequencer| {
                            sequencer.tick();
                        });
                    }
                    state.with_untracked(RevealSequencer::is_complete)
                });
                if complete != Some(false) {
                    // Not dropped inside its own callback
                    if let Some(interval) = tick_slot.borrow_mut().take() {
                        leptos::task::spawn_local(async move { drop(interval) });
                    }
                }
            });
            *slot.borrow_mut() = Some(interval);

            let subtext_liveness = timer_liveness.clone();
            let timeout = Timeout::new(subtext_ms, move || {
                subtext_liveness.guard(|| {
                    set_state.update(|sequencer| {
                        sequencer.show_subtext();
                    });
                });
            });

            Teardown::new(timer_liveness.clone(), move || {
                slot.borrow_mut().take();
                drop(timeout);
            })
        });
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = set_state;
    }

    let cleanup_liveness = liveness;
    on_cleanup(move || cleanup_liveness.revoke());
    state
}

#[cfg(feature = "hydrate")]
fn read_scroll_sample() -> Option<ScrollSample> {
    let window = web_sys::window()?;
    let offset = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let document_height = window.document()?.document_element()?.scroll_height();
    Some(ScrollSample::new(
        offset,
        f64::from(document_height),
        viewport_height,
    ))
}

/// Attach an `IntersectionObserver` to `element`; the returned guard
/// disconnects it. Entries are dropped once either the owning component or
/// this registration is gone.
#[cfg(feature = "hydrate")]
fn observe_element(
    element: web_sys::Element,
    options: &ObserverOptions,
    owner: Liveness,
    on_entry: impl Fn(f64, bool) + 'static,
) -> Option<Teardown> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let registration = Liveness::new();
    let callback_registration = registration.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
            if !owner.is_alive() || !callback_registration.is_alive() {
                return;
            }
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() {
                    on_entry(entry.intersection_ratio(), entry.is_intersecting());
                }
            }
        },
    );

    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&wasm_bindgen::JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin);

    let observer =
        match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(err) => {
                leptos::logging::warn!("IntersectionObserver unavailable: {:?}", err);
                return None;
            }
        };
    observer.observe(&element);

    Some(Teardown::new(registration, move || {
        observer.disconnect();
        drop(callback);
    }))
}
