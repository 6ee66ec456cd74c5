use std::{cell::Cell, ops::Range, rc::Rc};

use super::{follow::Point, pick};

pub const GLYPHS: [&str; 11] = [
    "✨", "⚡", "💥", "🔥", "💫", "🫶", "🚀", "🎯", "🌈", "🧩", "🫡",
];

pub const EASING: &str = "cubic-bezier(.2,.8,.2,1)";

/// Particles per touch point in a tap burst.
pub const BURST_COUNT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    /// Short-lived trail behind the mouse.
    Trail,
    /// Tap confetti.
    Burst,
    /// Slow ambient float from the bottom edge.
    Idle,
}

impl ParticleKind {
    pub fn opacity(&self) -> f64 {
        match self {
            Self::Trail => 0.9,
            Self::Burst => 1.0,
            Self::Idle => 0.6,
        }
    }

    pub fn duration_window(&self) -> Range<f64> {
        match self {
            Self::Trail => 500.0..1100.0,
            Self::Burst | Self::Idle => 900.0..1800.0,
        }
    }
}

fn lerp(range: Range<f64>, t: f64) -> f64 {
    range.start + (range.end - range.start) * t.clamp(0.0, 1.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub glyph: &'static str,
    pub origin: Point,
    pub opacity: f64,
    pub font_px: u32,
    pub scale: f64,
    pub drift: Point,
    pub rotation_deg: f64,
    pub duration_ms: f64,
}

impl Particle {
    /// Rolls a particle of `kind` at `origin` from a uniform `[0, 1)` source.
    pub fn roll(kind: ParticleKind, origin: Point, rng: &mut impl FnMut() -> f64) -> Self {
        let glyph = *pick(&GLYPHS, rng());
        let idle = kind == ParticleKind::Idle;
        let font_px = if idle {
            12
        } else {
            12 + (rng() * 16.0).floor().clamp(0.0, 15.0) as u32
        };
        let scale = if idle { 0.9 } else { lerp(0.8..1.4, rng()) };
        let drift_x = (rng() - 0.5) * if idle { 60.0 } else { 160.0 };
        let drift_y = if idle {
            -lerp(40.0..80.0, rng())
        } else {
            -lerp(80.0..160.0, rng())
        };
        let rotation_deg = (rng() - 0.5) * if idle { 30.0 } else { 90.0 };
        let duration_ms = lerp(kind.duration_window(), rng());

        Self {
            glyph,
            origin,
            opacity: kind.opacity(),
            font_px,
            scale,
            drift: Point::new(drift_x, drift_y),
            rotation_deg,
            duration_ms,
        }
    }

    pub fn from_transform(&self) -> String {
        format!("translate(-50%, -50%) scale({:.3})", self.scale)
    }

    pub fn to_transform(&self) -> String {
        format!(
            "translate(calc(-50% + {:.1}px), calc(-50% + {:.1}px)) rotate({:.1}deg)",
            self.drift.x, self.drift.y, self.rotation_deg
        )
    }

    /// Inline style for the freshly inserted element.
    pub fn style(&self) -> String {
        format!(
            "position:fixed;left:{:.1}px;top:{:.1}px;pointer-events:none;z-index:50;font-size:{}px;opacity:{};transform:{}",
            self.origin.x,
            self.origin.y,
            self.font_px,
            self.opacity,
            self.from_transform()
        )
    }
}

/// Idle spawn point: anywhere across the width, within 100px of the bottom.
pub fn idle_origin(viewport_w: f64, viewport_h: f64, rng: &mut impl FnMut() -> f64) -> Point {
    Point::new(rng() * viewport_w, viewport_h - 20.0 - rng() * 80.0)
}

/// Delay before the next idle particle.
pub fn idle_delay_ms(rng: &mut impl FnMut() -> f64) -> u64 {
    lerp(600.0..1600.0, rng()) as u64
}

/// Once-only removal guard shared by every path that may despawn a particle.
#[derive(Debug, Clone, Default)]
pub struct Despawn {
    done: Rc<Cell<bool>>,
}

impl Despawn {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true for exactly one caller.
    pub fn fire(&self) -> bool {
        !self.done.replace(true)
    }

    pub fn is_done(&self) -> bool {
        self.done.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle(values: &'static [f64]) -> impl FnMut() -> f64 {
        let mut i = 0;
        move || {
            let v = values[i % values.len()];
            i += 1;
            v
        }
    }

    #[test]
    fn test_durations_within_window() {
        for kind in [ParticleKind::Trail, ParticleKind::Burst, ParticleKind::Idle] {
            for v in [0.0, 0.25, 0.5, 0.999_999] {
                let mut rng = move || v;
                let p = Particle::roll(kind, Point::default(), &mut rng);
                let window = kind.duration_window();
                assert!(window.contains(&p.duration_ms), "{kind:?} {}", p.duration_ms);
                assert!(p.drift.y < 0.0, "particles always rise");
                assert_eq!(p.opacity, kind.opacity());
                assert!(GLYPHS.contains(&p.glyph));
            }
        }
    }

    #[test]
    fn test_idle_is_gentler() {
        let mut rng = cycle(&[0.999]);
        let idle = Particle::roll(ParticleKind::Idle, Point::default(), &mut rng);
        assert_eq!(idle.font_px, 12);
        assert_eq!(idle.scale, 0.9);
        assert!(idle.drift.x.abs() <= 30.0);
        assert!(idle.rotation_deg.abs() <= 15.0);

        let mut rng = cycle(&[0.999]);
        let trail = Particle::roll(ParticleKind::Trail, Point::default(), &mut rng);
        assert_eq!(trail.font_px, 27);
        assert!(trail.drift.x > 30.0);
        assert!(trail.rotation_deg > 15.0);
    }

    #[test]
    fn test_css() {
        let mut rng = cycle(&[0.0]);
        let p = Particle::roll(ParticleKind::Burst, Point::new(10.0, 20.0), &mut rng);
        assert_eq!(p.glyph, "✨");
        assert_eq!(p.from_transform(), "translate(-50%, -50%) scale(0.800)");
        assert_eq!(
            p.to_transform(),
            "translate(calc(-50% + -80.0px), calc(-50% + -80.0px)) rotate(-45.0deg)"
        );
        assert!(p.style().starts_with("position:fixed;left:10.0px;top:20.0px;"));
        assert!(p.style().contains("opacity:1;"));
    }

    #[test]
    fn test_idle_spawn() {
        let mut rng = cycle(&[0.5]);
        let origin = idle_origin(400.0, 800.0, &mut rng);
        assert_eq!(origin, Point::new(200.0, 740.0));
        assert_eq!(idle_delay_ms(&mut cycle(&[0.0])), 600);
        assert_eq!(idle_delay_ms(&mut cycle(&[0.5])), 1100);
    }

    #[test]
    fn test_despawn_once() {
        let guard = Despawn::new();
        let timer_path = guard.clone();
        assert!(!guard.is_done());
        assert!(guard.fire());
        assert!(!timer_path.fire());
        assert!(!guard.fire());
        assert!(timer_path.is_done());
    }
}
