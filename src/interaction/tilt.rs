use super::{clamp_deg, follow::Point};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltConfig {
    pub max_x_deg: f64,
    pub max_y_deg: f64,
    pub perspective_px: f64,
    pub lifted_scale: f64,
    /// Device beta (front/back) that maps to a full `max_x_deg`.
    pub beta_range: f64,
    /// Device gamma (left/right) that maps to a full `max_y_deg`.
    pub gamma_range: f64,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_x_deg: 10.0,
            max_y_deg: 12.0,
            perspective_px: 900.0,
            lifted_scale: 1.02,
            beta_range: 90.0,
            gamma_range: 60.0,
        }
    }
}

/// Element geometry needed to map a pointer onto the card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Pointer offset from the center as a fraction of the element size.
    /// Zero-sized bounds yield no offset.
    pub fn relative_offset(&self, pointer: Point) -> (f64, f64) {
        if self.width <= 0.0 || self.height <= 0.0 {
            return (0.0, 0.0);
        }
        let c = self.center();
        ((pointer.x - c.x) / self.width, (pointer.y - c.y) / self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub scale: f64,
}

impl Tilt {
    pub fn neutral() -> Self {
        Self {
            rotate_x: 0.0,
            rotate_y: 0.0,
            scale: 1.0,
        }
    }

    pub fn from_pointer(config: &TiltConfig, bounds: &Bounds, pointer: Point) -> Self {
        let (dx, dy) = bounds.relative_offset(pointer);
        Self {
            rotate_x: clamp_deg(dy * -config.max_x_deg, config.max_x_deg),
            rotate_y: clamp_deg(dx * config.max_y_deg, config.max_y_deg),
            scale: config.lifted_scale,
        }
    }

    /// Maps device orientation; missing readings count as level.
    pub fn from_orientation(config: &TiltConfig, beta: Option<f64>, gamma: Option<f64>) -> Self {
        let beta = beta.unwrap_or(0.0);
        let gamma = gamma.unwrap_or(0.0);
        Self {
            rotate_x: clamp_deg(-(beta / config.beta_range) * config.max_x_deg, config.max_x_deg),
            rotate_y: clamp_deg((gamma / config.gamma_range) * config.max_y_deg, config.max_y_deg),
            scale: config.lifted_scale,
        }
    }

    pub fn to_css(&self, config: &TiltConfig) -> String {
        format!(
            "perspective({}px) rotateX({:.2}deg) rotateY({:.2}deg) scale({})",
            config.perspective_px, self.rotate_x, self.rotate_y, self.scale
        )
    }
}

/// Pull of a magnetic button toward the pointer.
pub const MAGNET_STRENGTH: f64 = 0.08;

pub fn magnet_css(bounds: &Bounds, pointer: Point) -> String {
    let c = bounds.center();
    format!(
        "translate({:.2}px, {:.2}px) scale(1.02)",
        (pointer.x - c.x) * MAGNET_STRENGTH,
        (pointer.y - c.y) * MAGNET_STRENGTH
    )
}

pub const MAGNET_REST_CSS: &str = "translate(0px, 0px) scale(1)";

/// Pupil position on a circle of `radius` around the eye center, facing the pointer.
pub fn pupil_offset(eye: &Bounds, pointer: Point, radius: f64) -> Point {
    let c = eye.center();
    let angle = (pointer.y - c.y).atan2(pointer.x - c.x);
    Point::new(angle.cos() * radius, angle.sin() * radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Bounds = Bounds {
        left: 100.0,
        top: 100.0,
        width: 200.0,
        height: 100.0,
    };

    #[test]
    fn test_pointer_tilt() {
        let config = TiltConfig::default();
        // right edge, vertically centered
        let t = Tilt::from_pointer(&config, &CARD, Point::new(300.0, 150.0));
        assert_eq!(t.rotate_x, 0.0);
        assert!((t.rotate_y - 6.0).abs() < 1e-9);

        // above the card's top edge
        let t = Tilt::from_pointer(&config, &CARD, Point::new(200.0, 100.0));
        assert!((t.rotate_x - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_pointer_tilt_is_bounded() {
        let config = TiltConfig::default();
        let t = Tilt::from_pointer(&config, &CARD, Point::new(-5000.0, 9000.0));
        assert_eq!(t.rotate_x, -10.0);
        assert_eq!(t.rotate_y, -12.0);
    }

    #[test]
    fn test_zero_bounds() {
        let config = TiltConfig::default();
        let empty = Bounds {
            left: 0.0,
            top: 0.0,
            width: 0.0,
            height: 0.0,
        };
        let t = Tilt::from_pointer(&config, &empty, Point::new(50.0, 50.0));
        assert_eq!((t.rotate_x, t.rotate_y), (0.0, 0.0));
    }

    #[test]
    fn test_orientation_tilt() {
        let config = TiltConfig::default();
        let t = Tilt::from_orientation(&config, Some(45.0), Some(-30.0));
        assert!((t.rotate_x + 5.0).abs() < 1e-9);
        assert!((t.rotate_y + 6.0).abs() < 1e-9);

        let t = Tilt::from_orientation(&config, Some(-180.0), Some(90.0));
        assert_eq!(t.rotate_x, 10.0);
        assert_eq!(t.rotate_y, 12.0);

        let t = Tilt::from_orientation(&config, None, None);
        assert_eq!((t.rotate_x, t.rotate_y), (0.0, 0.0));
    }

    #[test]
    fn test_css() {
        let config = TiltConfig::default();
        assert_eq!(
            Tilt::neutral().to_css(&config),
            "perspective(900px) rotateX(0.00deg) rotateY(0.00deg) scale(1)"
        );
        let t = Tilt {
            rotate_x: -2.5,
            rotate_y: 3.333,
            scale: 1.02,
        };
        assert_eq!(
            t.to_css(&config),
            "perspective(900px) rotateX(-2.50deg) rotateY(3.33deg) scale(1.02)"
        );
    }

    #[test]
    fn test_magnet() {
        let css = magnet_css(&CARD, Point::new(250.0, 100.0));
        assert_eq!(css, "translate(4.00px, -4.00px) scale(1.02)");
    }

    #[test]
    fn test_pupil_faces_pointer() {
        let eye = Bounds {
            left: 0.0,
            top: 0.0,
            width: 40.0,
            height: 40.0,
        };
        let p = pupil_offset(&eye, Point::new(500.0, 20.0), 15.0);
        assert!((p.x - 15.0).abs() < 1e-9);
        assert!(p.y.abs() < 1e-9);

        let p = pupil_offset(&eye, Point::new(20.0, -300.0), 15.0);
        assert!(p.x.abs() < 1e-9);
        assert!((p.y + 15.0).abs() < 1e-9);
    }
}
