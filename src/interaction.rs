//! DOM-free interaction primitives shared by every effect on the site.
//!
//! Components in `app` feed browser input into these types and write the
//! results back as styles; nothing here touches the document, so it all runs
//! under plain `cargo test`.

pub mod cursor;
pub mod follow;
pub mod gesture;
pub mod glitch;
pub mod motion;
pub mod particle;
pub mod peek;
pub mod tilt;

use thiserror::Error;

pub use follow::{FollowConfig, Point};
pub use gesture::{GestureConfig, Swipe};
pub use glitch::GlitchConfig;
pub use peek::PeekConfig;
pub use tilt::TiltConfig;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InteractionError {
    #[error("element `{0}` is not mounted")]
    MissingElement(&'static str),
    #[error("Web Animations API unavailable")]
    AnimationUnsupported,
    #[error("motion permission denied")]
    PermissionDenied,
    #[error("dom error: {0}")]
    Dom(String),
}

/// Tuning for every effect, provided once through context.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionConfig {
    pub gesture: GestureConfig,
    pub follow: FollowConfig,
    pub tilt: TiltConfig,
    pub peek: PeekConfig,
    pub glitch: GlitchConfig,
}

/// Picks an item from a non-empty slice with a uniform `[0, 1)` sample.
///
/// Panics on an empty slice.
pub fn pick<T>(items: &[T], r: f64) -> &T {
    let i = (r.clamp(0.0, 1.0) * items.len() as f64) as usize;
    &items[i.min(items.len() - 1)]
}

pub(crate) fn clamp_deg(value: f64, max: f64) -> f64 {
    value.clamp(-max, max)
}
