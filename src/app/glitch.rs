use std::time::Duration;

use leptos::prelude::*;

use super::dom::random;
use crate::interaction::{glitch::GLITCH_CLASS, InteractionConfig};

const TITLE_CLASS: &str = "select-none text-center text-5xl sm:text-6xl md:text-7xl lg:text-8xl font-extrabold tracking-tight drop-shadow-[0_6px_24px_rgba(0,0,0,0.35)]";

/// Headline that glitches every few seconds and whenever the mouse enters it.
#[component]
pub fn GlitchTitle(#[prop(into)] text: Signal<String>) -> impl IntoView {
    let config = use_context::<InteractionConfig>().unwrap_or_default().glitch;
    let (glitching, set_glitching) = signal(false);
    let burst_timer = StoredValue::new(None::<TimeoutHandle>);
    let next_timer = StoredValue::new(None::<TimeoutHandle>);

    let burst = move || {
        set_glitching.set(true);
        if let Some(handle) = burst_timer.get_value() {
            handle.clear();
        }
        let handle = set_timeout_with_handle(
            move || {
                let _ = set_glitching.try_set(false);
            },
            Duration::from_millis(config.burst_ms),
        );
        burst_timer.set_value(handle.ok());
    };

    fn schedule(
        timer: StoredValue<Option<TimeoutHandle>>,
        gap_ms: u64,
        burst: impl Fn() + Copy + 'static,
        next_gap: impl Fn() -> u64 + Copy + 'static,
    ) {
        let handle = set_timeout_with_handle(
            move || {
                // disposed owners stop the loop
                if timer.try_get_value().is_none() {
                    return;
                }
                burst();
                schedule(timer, next_gap(), burst, next_gap);
            },
            Duration::from_millis(gap_ms),
        );
        if let Ok(handle) = handle {
            if timer.try_set_value(Some(handle)).is_some() {
                handle.clear();
            }
        }
    }

    let next_gap = move || config.next_gap_ms(random());
    Effect::new(move |_| schedule(next_timer, next_gap(), burst, next_gap));

    on_cleanup(move || {
        for timer in [burst_timer, next_timer] {
            if let Some(handle) = timer.try_get_value().flatten() {
                handle.clear();
            }
        }
    });

    view! {
        <h1
            id="glitchTitle"
            class=move || {
                if glitching.get() {
                    format!("{TITLE_CLASS} {GLITCH_CLASS}")
                } else {
                    TITLE_CLASS.to_string()
                }
            }
            on:mouseenter=move |_| burst()
        >
            {text}
        </h1>
    }
}
