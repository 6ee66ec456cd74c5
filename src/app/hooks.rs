use leptos::{prelude::*, task::spawn_local};
use leptos_use::use_media_query;

use super::dom::{motion_needs_prompt, request_motion_permission};
use crate::interaction::motion::MotionPermission;

/// Touch-first device, without fine pointer precision.
pub fn use_is_coarse() -> Signal<bool> {
    use_media_query("(pointer: coarse)")
}

/// Phones and tablets: coarse pointer or a narrow viewport.
pub fn use_is_mobile() -> Signal<bool> {
    let coarse = use_is_coarse();
    let narrow = use_media_query("(max-width: 1024px)");
    Signal::derive(move || coarse.get() || narrow.get())
}

/// Tracks device-orientation permission and exposes a manual request.
///
/// The request must be triggered from a user gesture (a click) on platforms
/// that prompt.
pub fn use_motion_permission(
    is_coarse: Signal<bool>,
) -> (ReadSignal<MotionPermission>, impl Fn() + Copy + 'static) {
    let (permission, set_permission) = signal(MotionPermission::default());

    Effect::new(move |_| {
        let fresh = MotionPermission::detect(is_coarse.get(), motion_needs_prompt());
        set_permission.update(|p| {
            *p = match (*p, fresh) {
                // a granted prompt outlives a media query flip
                (MotionPermission::Granted, MotionPermission::Prompt) => MotionPermission::Granted,
                (_, fresh) => fresh,
            }
        });
    });

    let request = move || {
        spawn_local(async move {
            let granted = match request_motion_permission().await {
                Ok(()) => true,
                Err(e) => {
                    log::info!("device motion stays off: {e}");
                    false
                }
            };
            let _ = set_permission.try_update(|p| *p = p.answer(granted));
        });
    };

    (permission, request)
}
