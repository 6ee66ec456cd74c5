use std::time::Duration;

use leptos::{prelude::*, task::spawn_local};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, EventTarget, HtmlElement};

use crate::interaction::{
    cursor::HOT_SELECTOR,
    gesture::{is_interactive_tag, PointerSample},
    particle::{Despawn, Particle, EASING},
    tilt::Bounds,
    InteractionError, Point,
};

pub fn dom_err(err: JsValue) -> InteractionError {
    InteractionError::Dom(format!("{err:?}"))
}

pub fn now_ms() -> f64 {
    window()
        .performance()
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

pub fn random() -> f64 {
    js_sys::Math::random()
}

/// Uniform `[0, 1)` source for the interaction primitives.
pub fn rng() -> impl FnMut() -> f64 {
    random
}

pub fn viewport() -> (f64, f64) {
    let win = window();
    let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (read(win.inner_width()), read(win.inner_height()))
}

pub fn bounds_of(el: &Element) -> Bounds {
    let rect = el.get_bounding_client_rect();
    Bounds {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

pub fn set_transform(el: &HtmlElement, css: &str) -> Result<(), InteractionError> {
    el.style().set_property("transform", css).map_err(dom_err)
}

/// Adds or removes a class on `<body>`.
pub fn set_body_class(name: &str, on: bool) -> Result<(), InteractionError> {
    let body = document()
        .body()
        .ok_or(InteractionError::MissingElement("body"))?;
    let classes = body.class_list();
    if on {
        classes.add_1(name).map_err(dom_err)
    } else {
        classes.remove_1(name).map_err(dom_err)
    }
}

fn as_element(target: Option<EventTarget>) -> Option<Element> {
    target.and_then(|t| t.dyn_into::<Element>().ok())
}

/// Whether a touch starting on `target` belongs to the element, not a swipe.
pub fn suppresses_swipe(target: Option<EventTarget>) -> bool {
    let Some(el) = as_element(target) else {
        return false;
    };
    if is_interactive_tag(&el.tag_name()) {
        return true;
    }
    if el
        .dyn_ref::<HtmlElement>()
        .is_some_and(|h| h.is_content_editable())
    {
        return true;
    }
    matches!(el.closest("[data-no-swipe='true']"), Ok(Some(_)))
}

/// Whether the pointer is over something the cursor should grow for.
pub fn is_hot(target: Option<EventTarget>) -> bool {
    as_element(target).is_some_and(|el| matches!(el.closest(HOT_SELECTOR), Ok(Some(_))))
}

pub fn first_touch(touches: &web_sys::TouchList) -> Option<PointerSample> {
    touches
        .get(0)
        .map(|t| PointerSample::touch(t.client_x() as f64, t.client_y() as f64, now_ms()))
}

pub fn mouse_point(ev: &web_sys::MouseEvent) -> Point {
    Point::new(ev.client_x() as f64, ev.client_y() as f64)
}

fn keyframe(transform: &str, opacity: f64) -> Result<js_sys::Object, InteractionError> {
    let frame = js_sys::Object::new();
    js_sys::Reflect::set(&frame, &"transform".into(), &transform.into()).map_err(dom_err)?;
    js_sys::Reflect::set(&frame, &"opacity".into(), &opacity.into()).map_err(dom_err)?;
    Ok(frame)
}

/// Runs the drift animation, returning the promise of its completion.
fn animate(el: &Element, particle: &Particle) -> Result<js_sys::Promise, InteractionError> {
    let animate = js_sys::Reflect::get(el, &"animate".into()).map_err(dom_err)?;
    let animate = animate
        .dyn_into::<js_sys::Function>()
        .map_err(|_| InteractionError::AnimationUnsupported)?;

    let keyframes = js_sys::Array::new();
    keyframes.push(&keyframe(&particle.from_transform(), particle.opacity)?);
    keyframes.push(&keyframe(&particle.to_transform(), 0.0)?);

    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"duration".into(), &particle.duration_ms.into())
        .map_err(dom_err)?;
    js_sys::Reflect::set(&options, &"easing".into(), &EASING.into()).map_err(dom_err)?;
    js_sys::Reflect::set(&options, &"fill".into(), &"forwards".into()).map_err(dom_err)?;

    let animation = animate.call2(el, &keyframes, &options).map_err(dom_err)?;
    js_sys::Reflect::get(&animation, &"finished".into())
        .map_err(dom_err)?
        .dyn_into::<js_sys::Promise>()
        .map_err(|_| InteractionError::AnimationUnsupported)
}

/// Appends a particle to the body and schedules its removal.
///
/// The element is removed when its animation settles or when the duration
/// timer fires, whichever comes first; the other path is a no-op.
pub fn spawn_particle(particle: &Particle) -> Result<(), InteractionError> {
    let doc = document();
    let body = doc.body().ok_or(InteractionError::MissingElement("body"))?;
    let span = doc.create_element("span").map_err(dom_err)?;
    span.set_text_content(Some(particle.glyph));
    span.set_attribute("style", &particle.style()).map_err(dom_err)?;
    span.set_attribute("aria-hidden", "true").map_err(dom_err)?;
    body.append_child(&span).map_err(dom_err)?;

    let despawn = Despawn::new();
    {
        let span = span.clone();
        let despawn = despawn.clone();
        set_timeout(
            move || {
                if despawn.fire() {
                    span.remove();
                }
            },
            Duration::from_millis(particle.duration_ms.ceil() as u64),
        );
    }

    match animate(&span, particle) {
        Ok(finished) => spawn_local(async move {
            // settles on finish and on cancel alike
            let _ = JsFuture::from(finished).await;
            if despawn.fire() {
                span.remove();
            }
        }),
        Err(InteractionError::AnimationUnsupported) => {
            log::trace!("no Web Animations, particle falls back to its timer");
        }
        Err(e) => log::debug!("particle animation failed: {e}"),
    }
    Ok(())
}

fn orientation_permission_request() -> Option<(JsValue, js_sys::Function)> {
    let ctor = js_sys::Reflect::get(&window(), &"DeviceOrientationEvent".into()).ok()?;
    if ctor.is_undefined() {
        return None;
    }
    let request = js_sys::Reflect::get(&ctor, &"requestPermission".into()).ok()?;
    request
        .dyn_into::<js_sys::Function>()
        .ok()
        .map(|f| (ctor, f))
}

/// Whether device orientation sits behind an explicit permission prompt.
pub fn motion_needs_prompt() -> bool {
    orientation_permission_request().is_some()
}

/// Asks for device orientation access. Must run inside a user gesture.
pub async fn request_motion_permission() -> Result<(), InteractionError> {
    let Some((ctor, request)) = orientation_permission_request() else {
        return Ok(());
    };
    let promise = request
        .call0(&ctor)
        .map_err(dom_err)?
        .dyn_into::<js_sys::Promise>()
        .map_err(dom_err)?;
    let answer = JsFuture::from(promise).await.map_err(dom_err)?;
    if answer.as_string().as_deref() == Some("granted") {
        Ok(())
    } else {
        Err(InteractionError::PermissionDenied)
    }
}

/// Saved `overflow` values of the root and body while scrolling is locked.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    html: String,
    body: String,
}

fn scroll_roots() -> Result<(HtmlElement, HtmlElement), InteractionError> {
    let doc = document();
    let html = doc
        .document_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or(InteractionError::MissingElement("html"))?;
    let body = doc.body().ok_or(InteractionError::MissingElement("body"))?;
    Ok((html, body))
}

impl ScrollLock {
    pub fn acquire() -> Result<Self, InteractionError> {
        let (html, body) = scroll_roots()?;
        let lock = Self {
            html: html.style().get_property_value("overflow").unwrap_or_default(),
            body: body.style().get_property_value("overflow").unwrap_or_default(),
        };
        html.style()
            .set_property("overflow", "hidden")
            .map_err(dom_err)?;
        body.style()
            .set_property("overflow", "hidden")
            .map_err(dom_err)?;
        Ok(lock)
    }

    pub fn release(self) -> Result<(), InteractionError> {
        let (html, body) = scroll_roots()?;
        html.style()
            .set_property("overflow", &self.html)
            .map_err(dom_err)?;
        body.style()
            .set_property("overflow", &self.body)
            .map_err(dom_err)
    }
}

/// Smooth-scrolls to the first anchor found, stopping `fudge` px above it.
pub fn scroll_to_anchor(ids: &[&str], fudge: f64) {
    let win = window();
    let top = ids
        .iter()
        .find_map(|id| document().get_element_by_id(id))
        .map(|el| {
            let absolute = (el.get_bounding_client_rect().top() + win.scroll_y().unwrap_or(0.0)).floor();
            (absolute - fudge).max(0.0)
        })
        .unwrap_or(0.0);
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

#[cfg(all(test, target_arch = "wasm32"))]
pub(crate) mod tests {
    use super::*;
    use crate::interaction::particle::ParticleKind;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    /// Resolves after `ms` on the browser timer queue.
    pub(crate) async fn sleep(ms: i32) {
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            let _ = window().set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        });
        let _ = JsFuture::from(promise).await;
    }

    /// An element appended to `<body>`; callers remove it.
    pub(crate) fn fixture(tag: &str) -> HtmlElement {
        let el = document()
            .create_element(tag)
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap();
        document().body().unwrap().append_child(&el).unwrap();
        el
    }

    fn target(el: &Element) -> Option<EventTarget> {
        Some(el.clone().into())
    }

    #[wasm_bindgen_test]
    fn test_swipe_suppressed_on_controls_and_opt_outs() {
        let button = fixture("button");
        assert!(suppresses_swipe(target(&button)));

        let editable = fixture("div");
        editable.set_attribute("contenteditable", "true").unwrap();
        assert!(suppresses_swipe(target(&editable)));

        let zone = fixture("section");
        zone.set_attribute("data-no-swipe", "true").unwrap();
        let inner = document().create_element("span").unwrap();
        zone.append_child(&inner).unwrap();
        assert!(suppresses_swipe(target(&inner)));

        let plain = fixture("div");
        assert!(!suppresses_swipe(target(&plain)));
        assert!(!suppresses_swipe(None));

        for el in [button, editable, zone, plain] {
            el.remove();
        }
    }

    #[wasm_bindgen_test]
    fn test_body_class_toggle() {
        let classes = document().body().unwrap().class_list();
        set_body_class("fx-test", true).unwrap();
        assert!(classes.contains("fx-test"));
        set_body_class("fx-test", false).unwrap();
        assert!(!classes.contains("fx-test"));
        // removing twice is harmless
        set_body_class("fx-test", false).unwrap();
    }

    #[wasm_bindgen_test]
    async fn test_particle_removed_from_document() {
        let _ = any_spawner::Executor::init_wasm_bindgen();
        let body = document().body().unwrap();
        let before = body.child_element_count();

        let mut r = || 0.0;
        let particle = Particle::roll(ParticleKind::Trail, Point::new(20.0, 20.0), &mut r);
        spawn_particle(&particle).unwrap();
        assert_eq!(body.child_element_count(), before + 1);

        sleep(particle.duration_ms.ceil() as i32 + 250).await;
        assert_eq!(body.child_element_count(), before);
    }
}
