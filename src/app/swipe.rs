use std::time::Duration;

use leptos::{ev, prelude::*};
use leptos_router::{hooks::use_navigate, NavigateOptions};
use leptos_use::{
    use_event_listener, use_event_listener_with_options, use_window, UseEventListenerOptions,
};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use super::dom::{first_touch, now_ms, scroll_to_anchor, suppresses_swipe, viewport, ScrollLock};
use super::hooks::use_is_mobile;
#[cfg(feature = "hydrate")]
use super::{SitePrefs, PREFS_KEY};
use crate::interaction::{
    gesture::{GestureTracker, PointerSample, StartRegion},
    InteractionConfig, Swipe,
};

pub const PRO_PATH: &str = "/pro/professional";
pub const LANDING_ANCHORS: [&str; 2] = ["landing-start", "landing"];
const LANDING_FUDGE_PX: f64 = 32.0;
const BACK_HINT_MS: u64 = 2400;

/// When an in-flight touch move is captured with `preventDefault`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Capture {
    #[default]
    Never,
    /// Only clearly horizontal drags to the right.
    HorizontalRight,
    /// Every move of an armed gesture.
    Always,
}

#[derive(Debug, Clone, Copy)]
pub struct SwipeOptions {
    pub region: StartRegion,
    pub enabled: Signal<bool>,
    pub capture: Capture,
}

impl Default for SwipeOptions {
    fn default() -> Self {
        Self {
            region: StartRegion::Anywhere,
            enabled: Signal::stored(true),
            capture: Capture::Never,
        }
    }
}

/// Classifies single-finger swipes on the window and reports them to `on_swipe`.
///
/// Every surface shares the [`GestureConfig`](crate::interaction::GestureConfig)
/// from context; listeners are removed when the calling component unmounts.
pub fn use_swipe(options: SwipeOptions, on_swipe: impl Fn(Swipe) + 'static) {
    let config = use_context::<InteractionConfig>()
        .unwrap_or_default()
        .gesture;
    let tracker = StoredValue::new(GestureTracker::new(config, options.region));
    let enabled = options.enabled;

    let _ = use_event_listener(use_window(), ev::touchstart, move |ev| {
        if !enabled.get_untracked() {
            tracker.update_value(|t| t.cancel());
            return;
        }
        let touches = ev.touches();
        let Some(start) = first_touch(&touches) else {
            return;
        };
        let suppressed = suppresses_swipe(ev.target());
        tracker.update_value(|t| t.begin(start, touches.length() as usize, suppressed));
    });

    if options.capture != Capture::Never {
        let capture = options.capture;
        let _ = use_event_listener_with_options(
            use_window(),
            ev::touchmove,
            move |ev| {
                let Some(current) = first_touch(&ev.touches()) else {
                    return;
                };
                let capturing = tracker.with_value(|t| match capture {
                    Capture::Never => false,
                    Capture::HorizontalRight => t.should_capture_move(current),
                    Capture::Always => t.is_armed(),
                });
                if capturing {
                    ev.prevent_default();
                }
            },
            UseEventListenerOptions::default().passive(Some(false)),
        );
    }

    let _ = use_event_listener(use_window(), ev::touchend, move |ev| {
        let Some(touch) = ev.changed_touches().get(0) else {
            tracker.update_value(|t| t.cancel());
            return;
        };
        let end = PointerSample::touch(touch.client_x() as f64, touch.client_y() as f64, now_ms());
        let (width, _) = viewport();
        let swipe = tracker
            .try_update_value(|t| t.finish(end, width))
            .flatten();
        if !enabled.get_untracked() {
            return;
        }
        if let Some(swipe) = swipe {
            log::debug!("swipe {swipe:?}");
            on_swipe(swipe);
        }
    });

    let _ = use_event_listener(use_window(), ev::touchcancel, move |_| {
        tracker.update_value(|t| t.cancel());
    });
}

/// Full-screen "choose your path" overlay for touch visitors.
///
/// `visible` is shared with [`SwipeNav`] so the page-level gesture yields
/// while the gate is up.
#[component]
pub fn SwipeGate(visible: RwSignal<bool>) -> impl IntoView {
    let navigate = use_navigate();
    let is_mobile = use_is_mobile();
    let lock = StoredValue::new(None::<ScrollLock>);

    #[cfg(feature = "hydrate")]
    let (prefs, set_prefs, _) = use_local_storage::<SitePrefs, JsonSerdeWasmCodec>(PREFS_KEY);

    #[cfg(feature = "hydrate")]
    Effect::watch(
        move || prefs.get().gate_dismissed,
        move |dismissed, _, _| {
            if *dismissed {
                visible.set(false);
            }
        },
        true,
    );

    let shown = Signal::derive(move || visible.get() && is_mobile.get());

    Effect::new(move |_| {
        if shown.get() {
            if lock.with_value(Option::is_none) {
                match ScrollLock::acquire() {
                    Ok(saved) => lock.set_value(Some(saved)),
                    Err(e) => log::warn!("could not lock scrolling: {e}"),
                }
            }
        } else if let Some(saved) = lock.try_update_value(Option::take).flatten() {
            if let Err(e) = saved.release() {
                log::warn!("could not restore scrolling: {e}");
            }
        }
    });

    on_cleanup(move || {
        if let Some(saved) = lock.try_update_value(Option::take).flatten() {
            if let Err(e) = saved.release() {
                log::warn!("could not restore scrolling: {e}");
            }
        }
    });

    let dismiss = move || {
        visible.set(false);
        #[cfg(feature = "hydrate")]
        set_prefs.update(|p| p.gate_dismissed = true);
    };

    let go_professional = move || {
        dismiss();
        let navigate = navigate.clone();
        set_timeout(
            move || navigate(PRO_PATH, NavigateOptions::default()),
            Duration::from_millis(50),
        );
    };
    let go_fun = move || {
        dismiss();
        // wait for the scroll lock to lift before scrolling
        request_animation_frame(move || {
            set_timeout(
                || scroll_to_anchor(&LANDING_ANCHORS, LANDING_FUDGE_PX),
                Duration::from_millis(50),
            );
        });
    };

    use_swipe(
        SwipeOptions {
            enabled: shown,
            capture: Capture::Always,
            ..Default::default()
        },
        {
            let go_professional = go_professional.clone();
            move |swipe| match swipe {
                Swipe::Left => go_professional(),
                Swipe::Up => go_fun(),
                Swipe::Right => {}
            }
        },
    );

    view! {
        <Show when=move || shown.get()>
            <div
                id="swipe-gate"
                class="fixed inset-0 z-[9999] flex items-center justify-center bg-black/70 backdrop-blur-sm"
                role="dialog"
                aria-modal="true"
            >
                <div class="w-full h-full flex flex-col items-center justify-between text-white select-none">
                    <div class="w-full flex items-center justify-between px-6 pt-8">
                        <div class="flex items-center gap-3">
                            <svg
                                class="w-10 h-10 md:w-14 md:h-14 animate-nudge-left"
                                viewBox="0 0 24 24"
                                fill="none"
                                stroke="currentColor"
                                stroke-width="2"
                            >
                                <path d="M15 18l-6-6 6-6" />
                            </svg>
                            <div class="text-lg md:text-2xl font-bold">"Swipe Left"</div>
                        </div>
                        <button
                            class="text-right text-sm md:text-base opacity-80"
                            on:click={
                                let go_professional = go_professional.clone();
                                move |_| go_professional()
                            }
                        >
                            "Go to "
                            <span class="font-semibold">"Professional"</span>
                        </button>
                    </div>
                    <div class="text-center px-8">
                        <h2 class="text-2xl md:text-4xl font-bold mb-3">"Choose your path"</h2>
                        <p class="text-sm md:text-base opacity-90">
                            "Swipe " <span class="font-semibold">"Up"</span> " for "
                            <span class="font-semibold">"Fun"</span> " • Swipe "
                            <span class="font-semibold">"Left"</span> " for "
                            <span class="font-semibold">"Professional"</span>
                        </p>
                    </div>
                    <div class="w-full flex flex-col items-center pb-10">
                        <svg
                            class="w-12 h-12 md:w-16 md:h-16 animate-nudge-up mb-2"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="currentColor"
                            stroke-width="2"
                        >
                            <path d="M6 12l6-6 6 6" />
                            <path d="M12 6v12" />
                        </svg>
                        <div class="text-lg md:text-2xl font-bold">"Swipe Up"</div>
                        <button class="text-sm md:text-base opacity-80" on:click=move |_| go_fun()>
                            "Start at "
                            <span class="font-semibold">"Landing"</span>
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// Page-level left swipe to the professional page on phones and tablets.
#[component]
pub fn SwipeNav(gate_visible: RwSignal<bool>) -> impl IntoView {
    let navigate = use_navigate();
    let is_mobile = use_is_mobile();

    use_swipe(
        SwipeOptions {
            region: StartRegion::RightOf(0.55),
            enabled: Signal::derive(move || is_mobile.get() && !gate_visible.get()),
            capture: Capture::Never,
        },
        move |swipe| {
            if swipe == Swipe::Left {
                navigate(PRO_PATH, NavigateOptions::default());
            }
        },
    );
}

/// Right swipe back to the fun landing, with a short-lived hint.
#[component]
pub fn BackSwipe() -> impl IntoView {
    let navigate = use_navigate();
    let (show_hint, set_show_hint) = signal(true);
    let hint_timer = StoredValue::new(None::<TimeoutHandle>);

    Effect::new(move |_| {
        let handle = set_timeout_with_handle(
            move || set_show_hint.set(false),
            Duration::from_millis(BACK_HINT_MS),
        );
        hint_timer.set_value(handle.ok());
    });
    on_cleanup(move || {
        if let Some(handle) = hint_timer.try_get_value().flatten() {
            handle.clear();
        }
    });

    use_swipe(
        SwipeOptions {
            capture: Capture::HorizontalRight,
            ..Default::default()
        },
        move |swipe| {
            if swipe == Swipe::Right {
                navigate("/#landing-start", NavigateOptions::default());
            }
        },
    );

    view! {
        <div class="fixed top-4 left-3 z-[60] pointer-events-none" aria-hidden="true">
            <Show when=move || show_hint.get()>
                <div class="flex items-center gap-2 rounded-full bg-white/10 border border-white/20 text-white px-3 py-1.5 backdrop-blur-md">
                    <svg
                        class="w-5 h-5 animate-nudge-right"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                    >
                        <path d="M9 18l6-6-6-6" />
                    </svg>
                    <span class="text-sm font-medium">"Back to Fun page"</span>
                </div>
            </Show>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use super::*;
    use crate::app::dom::tests::{fixture, sleep};
    use leptos::mount::{mount_to, UnmountHandle};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn touch(kind: &str, x: i32, y: i32) {
        let body = document().body().unwrap();
        let init = web_sys::TouchInit::new(1, &body);
        init.set_client_x(x);
        init.set_client_y(y);
        let point = web_sys::Touch::new(&init).unwrap();
        let points = js_sys::Array::of1(&point);

        let ev_init = web_sys::TouchEventInit::new();
        if kind == "touchend" {
            ev_init.set_touches(&js_sys::Array::new());
        } else {
            ev_init.set_touches(&points);
        }
        ev_init.set_changed_touches(&points);
        let ev = web_sys::TouchEvent::new_with_event_init_dict(kind, &ev_init).unwrap();
        window().dispatch_event(&ev).unwrap();
    }

    fn swipe_left() {
        touch("touchstart", 300, 300);
        touch("touchend", 150, 305);
    }

    fn mount_counter(host: &web_sys::HtmlElement, lefts: Arc<AtomicUsize>) -> (Owner, UnmountHandle<()>) {
        let owner = Owner::new();
        let handle = owner.with(|| {
            mount_to(host.clone(), move || {
                use_swipe(SwipeOptions::default(), move |swipe| {
                    if swipe == Swipe::Left {
                        lefts.fetch_add(1, Ordering::SeqCst);
                    }
                });
            })
        });
        (owner, handle)
    }

    #[wasm_bindgen_test]
    async fn test_swipe_listeners_removed_on_unmount() {
        let host = fixture("div");
        let lefts = Arc::new(AtomicUsize::new(0));

        let (owner, handle) = mount_counter(&host, lefts.clone());
        sleep(20).await;
        swipe_left();
        assert_eq!(lefts.load(Ordering::SeqCst), 1);

        drop(handle);
        owner.cleanup();
        swipe_left();
        assert_eq!(lefts.load(Ordering::SeqCst), 1);

        // one callback per swipe after a remount
        let (owner, handle) = mount_counter(&host, lefts.clone());
        sleep(20).await;
        swipe_left();
        assert_eq!(lefts.load(Ordering::SeqCst), 2);

        drop(handle);
        owner.cleanup();
        host.remove();
    }

    #[wasm_bindgen_test]
    async fn test_swipe_ignores_disabled_surface() {
        let host = fixture("div");
        let lefts = Arc::new(AtomicUsize::new(0));
        let count = lefts.clone();

        let owner = Owner::new();
        let handle = owner.with(|| {
            mount_to(host.clone(), move || {
                let options = SwipeOptions {
                    enabled: Signal::stored(false),
                    ..Default::default()
                };
                use_swipe(options, move |_| {
                    count.fetch_add(1, Ordering::SeqCst);
                });
            })
        });
        sleep(20).await;
        swipe_left();
        assert_eq!(lefts.load(Ordering::SeqCst), 0);

        drop(handle);
        owner.cleanup();
        host.remove();
    }
}
