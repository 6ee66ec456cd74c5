use leptos::{ev, html, prelude::*};
use leptos_use::{use_device_orientation, use_event_listener, use_window, UseDeviceOrientationReturn};

use super::dom::{bounds_of, mouse_point, set_transform};
use super::hooks::{use_is_coarse, use_motion_permission};
use crate::interaction::{
    tilt::{magnet_css, pupil_offset, Tilt, MAGNET_REST_CSS},
    InteractionConfig, Point,
};

const PUPIL_RADIUS: f64 = 15.0;

/// Card that leans toward the mouse on desktop and follows device
/// orientation (or a finger drag, without motion access) on touch devices.
#[component]
pub fn TiltCard(children: Children, #[prop(optional, into)] class: String) -> impl IntoView {
    let config = use_context::<InteractionConfig>().unwrap_or_default().tilt;
    let card_ref = NodeRef::<html::Div>::new();
    let is_coarse = use_is_coarse();
    let (permission, request_motion) = use_motion_permission(is_coarse);

    let apply = move |tilt: Tilt| {
        let Some(card) = card_ref.get_untracked() else {
            return;
        };
        if let Err(e) = set_transform(&card, &tilt.to_css(&config)) {
            log::debug!("tilt skipped: {e}");
        }
    };

    let _ = use_event_listener(use_window(), ev::mousemove, move |ev| {
        if is_coarse.get_untracked() {
            return;
        }
        let Some(card) = card_ref.get_untracked() else {
            return;
        };
        apply(Tilt::from_pointer(&config, &bounds_of(&card), mouse_point(&ev)));
    });
    let _ = use_event_listener(use_window(), ev::mouseout, move |ev| {
        if ev.related_target().is_none() && !is_coarse.get_untracked() {
            apply(Tilt::neutral());
        }
    });

    let UseDeviceOrientationReturn { beta, gamma, .. } = use_device_orientation();
    let frame_pending = StoredValue::new(false);
    Effect::new(move |_| {
        // subscribe before deciding, so a later grant picks up the next reading
        let _ = (beta.get(), gamma.get());
        if !is_coarse.get() || !permission.get().allowed() {
            return;
        }
        if frame_pending.get_value() {
            return;
        }
        frame_pending.set_value(true);
        request_animation_frame(move || {
            let _ = frame_pending.try_set_value(false);
            let (Some(b), Some(g)) = (beta.try_get_untracked(), gamma.try_get_untracked()) else {
                return;
            };
            apply(Tilt::from_orientation(&config, b, g));
        });
    });

    let touch_fallback = move || is_coarse.get_untracked() && !permission.get_untracked().allowed();
    let _ = use_event_listener(card_ref, ev::touchmove, move |ev| {
        if !touch_fallback() {
            return;
        }
        let (Some(touch), Some(card)) = (ev.touches().get(0), card_ref.get_untracked()) else {
            return;
        };
        let at = Point::new(touch.client_x() as f64, touch.client_y() as f64);
        apply(Tilt::from_pointer(&config, &bounds_of(&card), at));
    });
    let _ = use_event_listener(card_ref, ev::touchend, move |_| {
        if touch_fallback() {
            apply(Tilt::neutral());
        }
    });
    let _ = use_event_listener(card_ref, ev::touchcancel, move |_| {
        if touch_fallback() {
            apply(Tilt::neutral());
        }
    });

    view! {
        <Show when=move || permission.get().offer_prompt()>
            <button
                class="mt-4 rounded-full border border-white/30 bg-white/10 px-4 py-2 text-sm backdrop-blur hover:bg-white/20 transition"
                on:click=move |_| request_motion()
            >
                "Enable Motion"
            </button>
        </Show>
        <div
            node_ref=card_ref
            class=format!("transition-transform duration-200 will-change-transform {class}")
        >
            {children()}
        </div>
    }
}

/// Link that drifts toward the mouse while hovered.
#[component]
pub fn MagneticLink(
    children: Children,
    #[prop(into)] href: String,
    #[prop(into)] class: Signal<String>,
    #[prop(optional)] download: bool,
) -> impl IntoView {
    let anchor_ref = NodeRef::<html::A>::new();

    let on_move = move |ev: ev::MouseEvent| {
        let Some(anchor) = anchor_ref.get_untracked() else {
            return;
        };
        let css = magnet_css(&bounds_of(&anchor), mouse_point(&ev));
        if let Err(e) = set_transform(&anchor, &css) {
            log::debug!("magnet skipped: {e}");
        }
    };
    let on_leave = move |_: ev::MouseEvent| {
        if let Some(anchor) = anchor_ref.get_untracked() {
            let _ = set_transform(&anchor, MAGNET_REST_CSS);
        }
    };

    view! {
        <a
            node_ref=anchor_ref
            href=href
            target="_blank"
            download=download
            data-cursor="link"
            class=class
            on:mousemove=on_move
            on:mouseleave=on_leave
        >
            {children()}
        </a>
    }
}

/// An eye whose pupil keeps looking at the mouse.
#[component]
pub fn Eye() -> impl IntoView {
    let eye_ref = NodeRef::<html::Div>::new();
    let pupil_ref = NodeRef::<html::Div>::new();

    let _ = use_event_listener(use_window(), ev::mousemove, move |ev| {
        let (Some(eye), Some(pupil)) = (eye_ref.get_untracked(), pupil_ref.get_untracked()) else {
            return;
        };
        let offset = pupil_offset(&bounds_of(&eye), mouse_point(&ev), PUPIL_RADIUS);
        let css = format!("translate({:.2}px, {:.2}px)", offset.x, offset.y);
        if let Err(e) = set_transform(&pupil, &css) {
            log::debug!("pupil skipped: {e}");
        }
    });

    view! {
        <div class="eye" node_ref=eye_ref aria-hidden="true">
            <div class="pupil" node_ref=pupil_ref></div>
        </div>
    }
}
