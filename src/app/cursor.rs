use std::time::Duration;

use leptos::{ev, html, prelude::*};
use leptos_use::{use_event_listener, use_raf_fn, use_window};

use super::dom::{is_hot, set_body_class, set_transform, viewport};
use crate::interaction::{
    cursor::{CursorClaim, CursorPresence, CursorSlot, CursorVariant, HideTimer, PresenceConfig},
    follow::SmoothFollow,
    gesture::PointerKind,
    InteractionConfig, Point,
};

/// Body class present while a follow cursor owns the page; the stylesheet
/// hides the system pointer only under it.
pub const CURSOR_OWNED_CLASS: &str = "cursor-owned";

/// Pointer-following cursor.
///
/// Only the owner of the page's [`CursorSlot`] renders. A cursor mounted
/// while another still holds the slot (the outgoing route during a
/// navigation) waits and takes over once that owner is dropped.
#[component]
pub fn FollowCursor(variant: CursorVariant) -> impl IntoView {
    let slot = expect_context::<CursorSlot>();
    let released = ArcTrigger::new();
    let claim = StoredValue::new(None::<CursorClaim>);
    let (owned, set_owned) = signal(false);

    Effect::new({
        let released = released.clone();
        move |_| {
            released.track();
            if claim.with_value(Option::is_some) {
                return;
            }
            let wake = released.clone();
            match slot.claim_or_wait(move || wake.notify()) {
                Some(granted) => {
                    claim.set_value(Some(granted));
                    set_owned.set(true);
                }
                None => log::debug!("cursor slot owned elsewhere, {variant:?} waiting"),
            }
        }
    });

    on_cleanup(move || {
        claim.try_update_value(Option::take);
    });

    view! {
        <Show when=move || owned.get()>
            <OwnedCursor variant />
        </Show>
    }
}

#[component]
fn OwnedCursor(variant: CursorVariant) -> impl IntoView {
    let config = use_context::<InteractionConfig>().unwrap_or_default();

    let root_ref = NodeRef::<html::Div>::new();
    let (visible, set_visible) = signal(false);
    let (active, set_active) = signal(false);
    let (hot, set_hot) = signal(false);

    let follow = StoredValue::new(SmoothFollow::new(config.follow, Point::new(-100.0, -100.0)));
    let presence = StoredValue::new(CursorPresence::new(PresenceConfig::default()));
    let hide_timer = StoredValue::new(None::<TimeoutHandle>);

    let hides_pointer = StoredValue::new(false);

    // start centered once mounted in the browser
    Effect::new(move |_| {
        let (w, h) = viewport();
        follow.update_value(|f| *f = SmoothFollow::new(config.follow, Point::new(w / 2.0, h / 2.0)));
        match set_body_class(CURSOR_OWNED_CLASS, true) {
            Ok(()) => hides_pointer.set_value(true),
            Err(e) => log::warn!("system pointer stays visible: {e}"),
        }
    });

    let apply_hide = move |cmd: HideTimer| {
        let restart_ms = match cmd {
            HideTimer::Keep => return,
            HideTimer::Cancel => None,
            HideTimer::Restart(ms) => Some(ms),
        };
        if let Some(handle) = hide_timer.get_value() {
            handle.clear();
        }
        let handle = restart_ms.and_then(|ms| {
            set_timeout_with_handle(
                move || {
                    if presence.try_update_value(|p| p.on_hide_elapsed()).is_some() {
                        set_visible.set(false);
                        hide_timer.set_value(None);
                    }
                },
                Duration::from_millis(ms.into()),
            )
            .ok()
        });
        hide_timer.set_value(handle);
    };

    let sync = move || {
        presence.with_value(|p| {
            set_visible.set(p.visible);
            set_active.set(p.active);
        });
    };

    let _ = use_event_listener(use_window(), ev::pointermove, move |ev| {
        let kind = PointerKind::from(ev.pointer_type().as_str());
        let at = Point::new(ev.client_x() as f64, ev.client_y() as f64);
        follow.update_value(|f| match kind {
            PointerKind::Touch => f.set_touch_target(at),
            _ => f.set_target(at),
        });
        set_hot.set(is_hot(ev.target()));
        let cmd = presence
            .try_update_value(|p| p.on_move(kind))
            .unwrap_or(HideTimer::Keep);
        apply_hide(cmd);
        sync();
    });

    let _ = use_event_listener(use_window(), ev::pointerdown, move |_| {
        let cmd = presence
            .try_update_value(|p| p.on_down())
            .unwrap_or(HideTimer::Keep);
        apply_hide(cmd);
        sync();
    });

    let on_up = move || {
        let cmd = presence
            .try_update_value(|p| p.on_up())
            .unwrap_or(HideTimer::Keep);
        apply_hide(cmd);
        sync();
    };
    let _ = use_event_listener(use_window(), ev::pointerup, move |_| on_up());
    let _ = use_event_listener(use_window(), ev::pointercancel, move |_| on_up());

    let _ = use_event_listener(use_window(), ev::mouseout, move |ev| {
        // no related target means the pointer left the window
        if ev.related_target().is_none() {
            presence.update_value(|p| p.on_leave());
            sync();
        }
    });

    let _ = use_raf_fn(move |_| {
        let Some(el) = root_ref.get_untracked() else {
            return;
        };
        let css = follow
            .try_update_value(|f| {
                let lean = f.tick();
                match variant {
                    CursorVariant::Server => f.translate3d_css(lean),
                    _ => f.translate_css(),
                }
            })
            .unwrap_or_default();
        if let Err(e) = set_transform(&el, &css) {
            log::debug!("cursor frame skipped: {e}");
        }
    });

    on_cleanup(move || {
        if let Some(handle) = hide_timer.try_get_value().flatten() {
            handle.clear();
        }
        if hides_pointer.try_get_value() == Some(true) {
            if let Err(e) = set_body_class(CURSOR_OWNED_CLASS, false) {
                log::warn!("could not restore the system pointer: {e}");
            }
        }
    });

    let root_class = move || {
        let mut class = String::from("follow-cursor fixed top-0 left-0 z-[9999] pointer-events-none");
        class.push_str(if visible.get() { " is-visible" } else { " is-hidden" });
        if active.get() {
            class.push_str(" is-active");
        }
        class
    };

    view! {
        <div
            node_ref=root_ref
            class=root_class
            style="transform: translate(-100px, -100px)"
            aria-hidden="true"
            role="presentation"
        >
            <div class=move || {
                if hot.get() { "cursor-inner cursor-hot" } else { "cursor-inner" }
            }>{cursor_body(variant)}</div>
        </div>
    }
}

fn cursor_body(variant: CursorVariant) -> AnyView {
    match variant {
        CursorVariant::Emoji(glyph) => view! { <span class="text-2xl">{glyph}</span> }.into_any(),
        CursorVariant::Dot => view! { <div class="cursor-dot" /> }.into_any(),
        CursorVariant::Ring => view! { <div class="cursor-ring" /> }.into_any(),
        CursorVariant::Blob => view! { <div class="cursor-blob" /> }.into_any(),
        CursorVariant::Server => view! {
            <div class="server-card">
                <div class="server-vent" />
                <div class="server-bays">
                    <div class="server-bay" />
                    <div class="server-bay" />
                    <div class="server-bay" />
                </div>
                <div class="server-lights">
                    <span class="led led-red" />
                    <span class="led led-amber" />
                    <span class="led led-green" />
                </div>
            </div>
            <div class="server-glow" />
        }
        .into_any(),
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::app::dom::tests::{fixture, sleep};
    use leptos::mount::mount_to;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn rendered(host: &web_sys::HtmlElement) -> u32 {
        host.get_elements_by_class_name("follow-cursor").length()
    }

    fn shows(host: &web_sys::HtmlElement, selector: &str) -> bool {
        host.query_selector(selector).unwrap().is_some()
    }

    #[wasm_bindgen_test]
    async fn test_waiting_cursor_takes_over_released_slot() {
        let host = fixture("div");
        let body_classes = document().body().unwrap().class_list();

        let owner = Owner::new();
        let (outgoing, incoming) = owner.with(|| (RwSignal::new(true), RwSignal::new(false)));
        let handle = owner.with(|| {
            mount_to(host.clone(), move || {
                provide_context(CursorSlot::new());
                view! {
                    <Show when=move || outgoing.get()>
                        <FollowCursor variant=CursorVariant::Dot />
                    </Show>
                    <Show when=move || incoming.get()>
                        <FollowCursor variant=CursorVariant::Ring />
                    </Show>
                }
            })
        });
        sleep(30).await;
        assert_eq!(rendered(&host), 1);
        assert!(shows(&host, ".cursor-dot"));
        assert!(body_classes.contains(CURSOR_OWNED_CLASS));

        // the next page's cursor mounts before the old one is gone
        incoming.set(true);
        sleep(30).await;
        assert_eq!(rendered(&host), 1);
        assert!(shows(&host, ".cursor-dot"));

        outgoing.set(false);
        sleep(30).await;
        assert_eq!(rendered(&host), 1);
        assert!(shows(&host, ".cursor-ring"));
        assert!(!shows(&host, ".cursor-dot"));
        assert!(body_classes.contains(CURSOR_OWNED_CLASS));

        drop(handle);
        owner.cleanup();
        assert!(!body_classes.contains(CURSOR_OWNED_CLASS));
        host.remove();
    }
}
