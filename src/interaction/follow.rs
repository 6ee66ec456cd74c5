use super::clamp_deg;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowConfig {
    /// Fraction of the remaining distance covered per frame.
    pub smoothing: f64,
    /// Offset applied to touch samples so the cursor clears the finger.
    pub touch_offset: Point,
    /// Degrees of lean per pixel of lag.
    pub lean_per_px: f64,
    pub max_lean_deg: f64,
}

impl Default for FollowConfig {
    fn default() -> Self {
        Self {
            smoothing: 0.18,
            touch_offset: Point::new(24.0, -48.0),
            lean_per_px: 0.06,
            max_lean_deg: 8.0,
        }
    }
}

/// Rotation a follower leans by while catching up to its target.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lean {
    pub x_deg: f64,
    pub y_deg: f64,
}

/// Exponential follow: the rendered position chases the latest target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothFollow {
    config: FollowConfig,
    pos: Point,
    target: Point,
}

impl SmoothFollow {
    /// Starts at rest on `origin`.
    pub fn new(config: FollowConfig, origin: Point) -> Self {
        Self {
            config,
            pos: origin,
            target: origin,
        }
    }

    pub fn position(&self) -> Point {
        self.pos
    }

    pub fn target(&self) -> Point {
        self.target
    }

    pub fn set_target(&mut self, target: Point) {
        self.target = target;
    }

    /// Sets the target from a touch sample, shifted clear of the finger.
    pub fn set_touch_target(&mut self, touch: Point) {
        self.target = Point::new(
            touch.x + self.config.touch_offset.x,
            touch.y + self.config.touch_offset.y,
        );
    }

    /// Advances one frame, returning the lean for the lag before the step.
    pub fn tick(&mut self) -> Lean {
        let k = self.config.smoothing;
        let dx = self.target.x - self.pos.x;
        let dy = self.target.y - self.pos.y;
        self.pos.x += dx * k;
        self.pos.y += dy * k;

        let max = self.config.max_lean_deg;
        Lean {
            x_deg: clamp_deg(-dy * self.config.lean_per_px, max),
            y_deg: clamp_deg(dx * self.config.lean_per_px, max),
        }
    }

    pub fn translate_css(&self) -> String {
        format!("translate({:.2}px, {:.2}px)", self.pos.x, self.pos.y)
    }

    /// 3D transform used by the server-rack cursor.
    pub fn translate3d_css(&self, lean: Lean) -> String {
        format!(
            "translate3d({:.2}px, {:.2}px, 0) rotateX({:.2}deg) rotateY({:.2}deg)",
            self.pos.x, self.pos.y, lean.x_deg, lean.y_deg
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converges_monotonically() {
        let mut follow = SmoothFollow::new(FollowConfig::default(), Point::default());
        let target = Point::new(640.0, -220.0);
        follow.set_target(target);

        let mut last = follow.position().distance(&target);
        for _ in 0..100 {
            follow.tick();
            let now = follow.position().distance(&target);
            assert!(now < last || now == 0.0, "{now} !< {last}");
            last = now;
        }
        assert!(last < 0.01);
    }

    #[test]
    fn test_single_step_fraction() {
        let mut follow = SmoothFollow::new(FollowConfig::default(), Point::default());
        follow.set_target(Point::new(100.0, 0.0));
        follow.tick();
        assert!((follow.position().x - 18.0).abs() < 1e-9);
        assert_eq!(follow.position().y, 0.0);
    }

    #[test]
    fn test_at_rest_stays_put() {
        let origin = Point::new(12.0, 34.0);
        let mut follow = SmoothFollow::new(FollowConfig::default(), origin);
        let lean = follow.tick();
        assert_eq!(follow.position(), origin);
        assert_eq!(lean, Lean::default());
    }

    #[test]
    fn test_lean_is_clamped() {
        let mut follow = SmoothFollow::new(FollowConfig::default(), Point::default());
        follow.set_target(Point::new(1000.0, 1000.0));
        let lean = follow.tick();
        assert_eq!(lean.x_deg, -8.0);
        assert_eq!(lean.y_deg, 8.0);

        let mut follow = SmoothFollow::new(FollowConfig::default(), Point::default());
        follow.set_target(Point::new(50.0, -50.0));
        let lean = follow.tick();
        assert!((lean.x_deg - 3.0).abs() < 1e-9);
        assert!((lean.y_deg - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_touch_offset() {
        let mut follow = SmoothFollow::new(FollowConfig::default(), Point::default());
        follow.set_touch_target(Point::new(100.0, 100.0));
        assert_eq!(follow.target(), Point::new(124.0, 52.0));
    }

    #[test]
    fn test_css() {
        let follow = SmoothFollow::new(FollowConfig::default(), Point::new(1.0, 2.5));
        assert_eq!(follow.translate_css(), "translate(1.00px, 2.50px)");
        assert_eq!(
            follow.translate3d_css(Lean {
                x_deg: -1.0,
                y_deg: 2.0
            }),
            "translate3d(1.00px, 2.50px, 0) rotateX(-1.00deg) rotateY(2.00deg)"
        );
    }
}
