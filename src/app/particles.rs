use std::time::Duration;

use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use super::dom::{mouse_point, rng, spawn_particle, viewport};
use super::hooks::use_is_coarse;
use crate::interaction::{
    particle::{idle_delay_ms, idle_origin, Particle, ParticleKind, BURST_COUNT},
    Point,
};

fn spawn(kind: ParticleKind, origin: Point) {
    let particle = Particle::roll(kind, origin, &mut rng());
    if let Err(e) = spawn_particle(&particle) {
        log::debug!("particle dropped: {e}");
    }
}

/// Re-arms itself until `running` turns false or the owner is disposed.
fn schedule_idle(timer: StoredValue<Option<TimeoutHandle>>, running: Signal<bool>) {
    let delay = Duration::from_millis(idle_delay_ms(&mut rng()));
    let handle = set_timeout_with_handle(
        move || {
            if !running.try_get_untracked().unwrap_or(false) {
                let _ = timer.try_set_value(None);
                return;
            }
            let (w, h) = viewport();
            spawn(ParticleKind::Idle, idle_origin(w, h, &mut rng()));
            schedule_idle(timer, running);
        },
        delay,
    );
    match handle {
        Ok(handle) => {
            if timer.try_set_value(Some(handle)).is_some() {
                // owner already gone
                handle.clear();
            }
        }
        Err(e) => log::warn!("idle particles stopped: {e:?}"),
    }
}

/// Emoji trail behind the mouse on desktop; floating idle particles and
/// tap confetti on touch devices.
#[component]
pub fn ParticleField() -> impl IntoView {
    let is_coarse = use_is_coarse();
    let idle_timer = StoredValue::new(None::<TimeoutHandle>);

    let _ = use_event_listener(use_window(), ev::mousemove, move |ev| {
        if !is_coarse.get_untracked() {
            spawn(ParticleKind::Trail, mouse_point(&ev));
        }
    });

    let _ = use_event_listener(use_window(), ev::touchstart, move |ev| {
        if !is_coarse.get_untracked() {
            return;
        }
        let touches = ev.touches();
        for i in 0..touches.length() {
            let Some(t) = touches.get(i) else {
                continue;
            };
            let at = Point::new(t.client_x() as f64, t.client_y() as f64);
            for _ in 0..BURST_COUNT {
                spawn(ParticleKind::Burst, at);
            }
        }
    });

    Effect::new(move |_| {
        if is_coarse.get() {
            if idle_timer.with_value(Option::is_none) {
                let (w, h) = viewport();
                spawn(ParticleKind::Idle, idle_origin(w, h, &mut rng()));
                schedule_idle(idle_timer, is_coarse);
            }
        } else if let Some(handle) = idle_timer.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    });

    on_cleanup(move || {
        if let Some(handle) = idle_timer.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    });
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::app::dom::tests::{fixture, sleep};
    use leptos::mount::mount_to;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn move_mouse() {
        let ev = web_sys::MouseEvent::new("mousemove").unwrap();
        window().dispatch_event(&ev).unwrap();
    }

    fn body_children() -> u32 {
        document().body().unwrap().child_element_count()
    }

    #[wasm_bindgen_test]
    async fn test_trail_listener_follows_mount() {
        let host = fixture("div");

        let owner = Owner::new();
        let handle = owner.with(|| mount_to(host.clone(), || view! { <ParticleField /> }));
        sleep(20).await;
        let before = body_children();
        move_mouse();
        assert_eq!(body_children(), before + 1);

        drop(handle);
        owner.cleanup();
        // let the trail particle run out
        sleep(1300).await;
        let settled = body_children();
        move_mouse();
        assert_eq!(body_children(), settled);

        // remounting registers exactly one listener again
        let owner = Owner::new();
        let handle = owner.with(|| mount_to(host.clone(), || view! { <ParticleField /> }));
        sleep(20).await;
        move_mouse();
        assert_eq!(body_children(), settled + 1);

        drop(handle);
        owner.cleanup();
        host.remove();
    }
}
