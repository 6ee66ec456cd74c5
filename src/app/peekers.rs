use std::time::Duration;

use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use super::dom::{now_ms, random, rng};
use super::hooks::use_is_mobile;
use crate::interaction::{
    peek::{PeekPool, PeekSide, Peeker, ScrollSpeed},
    InteractionConfig,
};

pub const PEEK_FALLBACK: &str = "/image/cm.png";

fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

/// Characters that pop in from the screen edges when a phone scrolls fast.
#[component]
pub fn Peekers(
    #[prop(optional)] images: Vec<String>,
    #[prop(default = PEEK_FALLBACK.to_string(), into)] fallback: String,
) -> impl IntoView {
    let config = use_context::<InteractionConfig>().unwrap_or_default().peek;
    let is_mobile = use_is_mobile();
    let pool = StoredValue::new(PeekPool::new(images, fallback.clone()));
    let peeker = StoredValue::new(Peeker::new(config));
    let speed = StoredValue::new(None::<ScrollSpeed>);
    let frame_pending = StoredValue::new(false);
    let retract = StoredValue::new(None::<TimeoutHandle>);

    let showing = RwSignal::new(None::<PeekSide>);
    let top_vh = RwSignal::new(50.0);
    let left_src = RwSignal::new(fallback.clone());
    let right_src = RwSignal::new(fallback);

    // warm the cache so the first peek is not blank
    Effect::new(move |_| {
        pool.with_value(|p| {
            for src in p.sources() {
                if let Ok(img) = web_sys::HtmlImageElement::new() {
                    img.set_src(src);
                }
            }
        });
        speed.set_value(Some(ScrollSpeed::new(scroll_y(), now_ms())));
    });

    let trigger = move |side: PeekSide, top: f64| {
        let src = pool.with_value(|p| p.pick(random()).to_string());
        match side {
            PeekSide::Left => left_src.set(src),
            PeekSide::Right => right_src.set(src),
        }
        top_vh.set(top);
        showing.set(Some(side));
        let handle = set_timeout_with_handle(
            move || {
                let _ = showing.try_set(None);
                peeker.try_update_value(|p| p.finish());
            },
            Duration::from_millis(config.peek_duration_ms),
        );
        retract.set_value(handle.ok());
    };

    let update = move || {
        frame_pending.set_value(false);
        let v = speed
            .try_update_value(|s| {
                let s = s.get_or_insert_with(|| ScrollSpeed::new(scroll_y(), now_ms()));
                s.sample(scroll_y(), now_ms())
            })
            .unwrap_or(0.0);
        if let Some((side, top)) = peeker.try_update_value(|p| p.try_start(v, &mut rng())).flatten() {
            log::trace!("peek {side:?} at {top:.0}vh, {v:.2}px/ms");
            trigger(side, top);
        }
    };

    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        if !is_mobile.get_untracked() || frame_pending.get_value() {
            return;
        }
        frame_pending.set_value(true);
        request_animation_frame(move || {
            if frame_pending.try_get_value().is_some() {
                update();
            }
        });
    });

    on_cleanup(move || {
        if let Some(handle) = retract.try_get_value().flatten() {
            handle.clear();
        }
    });

    let fall_back = move |src: RwSignal<String>| {
        let failed = src.get_untracked();
        if pool.with_value(|p| p.needs_fallback(&failed)) {
            src.set(pool.with_value(|p| p.fallback().to_string()));
        }
    };
    let peeker_class = move |side: PeekSide| {
        let base = match side {
            PeekSide::Left => "peeker peeker-left",
            PeekSide::Right => "peeker peeker-right",
        };
        if showing.get() == Some(side) {
            format!("{base} peek")
        } else {
            base.to_string()
        }
    };
    let top_style = move || format!("top: {:.1}vh", top_vh.get());

    view! {
        <div class="peekers" aria-hidden="true">
            <div class=move || peeker_class(PeekSide::Left) style=top_style>
                <img src=left_src alt="" class="peeker-img" on:error=move |_| fall_back(left_src) />
            </div>
            <div class=move || peeker_class(PeekSide::Right) style=top_style>
                <img
                    src=right_src
                    alt=""
                    class="peeker-img peeker-flip"
                    on:error=move |_| fall_back(right_src)
                />
            </div>
        </div>
    }
}
