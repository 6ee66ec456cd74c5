/// Source device of a pointer sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerKind {
    #[default]
    Mouse,
    Touch,
    Pen,
}

impl From<&str> for PointerKind {
    fn from(value: &str) -> Self {
        match value {
            "touch" => Self::Touch,
            "pen" => Self::Pen,
            _ => Self::Mouse,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
    pub timestamp_ms: f64,
    pub kind: PointerKind,
}

impl PointerSample {
    pub fn touch(x: f64, y: f64, timestamp_ms: f64) -> Self {
        Self {
            x,
            y,
            timestamp_ms,
            kind: PointerKind::Touch,
        }
    }
}

/// Thresholds shared by every swipe surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    pub min_distance: f64,
    pub axis_dominance: f64,
    pub max_duration_ms: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            min_distance: 80.0,
            axis_dominance: 1.2,
            max_duration_ms: 1200.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Left,
    Right,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureRecord {
    pub start_x: f64,
    pub start_y: f64,
    pub start_time: f64,
    pub end_x: f64,
    pub end_y: f64,
    pub end_time: f64,
}

impl GestureRecord {
    pub fn new(start: PointerSample, end: PointerSample) -> Self {
        Self {
            start_x: start.x,
            start_y: start.y,
            start_time: start.timestamp_ms,
            end_x: end.x,
            end_y: end.y,
            end_time: end.timestamp_ms,
        }
    }

    pub fn dx(&self) -> f64 {
        self.end_x - self.start_x
    }

    pub fn dy(&self) -> f64 {
        self.end_y - self.start_y
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// Classifies the record into at most one swipe.
    ///
    /// Downward swipes are never recognized; a downward drag is a scroll.
    pub fn classify(&self, config: &GestureConfig) -> Option<Swipe> {
        if self.elapsed_ms() > config.max_duration_ms {
            return None;
        }
        let (dx, dy) = (self.dx(), self.dy());
        let (abs_dx, abs_dy) = (dx.abs(), dy.abs());

        if abs_dx > abs_dy * config.axis_dominance {
            if dx < -config.min_distance {
                return Some(Swipe::Left);
            }
            if dx > config.min_distance {
                return Some(Swipe::Right);
            }
        } else if abs_dy > abs_dx * config.axis_dominance && dy < -config.min_distance {
            return Some(Swipe::Up);
        }
        None
    }
}

/// Restricts where a gesture may begin, as a fraction of viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StartRegion {
    #[default]
    Anywhere,
    RightOf(f64),
}

impl StartRegion {
    pub fn contains(&self, x: f64, viewport_width: f64) -> bool {
        match self {
            Self::Anywhere => true,
            Self::RightOf(ratio) => x >= viewport_width * ratio,
        }
    }
}

const INTERACTIVE_TAGS: [&str; 9] = [
    "a", "button", "input", "textarea", "select", "label", "iframe", "video", "canvas",
];

/// Whether an element with this tag name swallows touches itself.
pub fn is_interactive_tag(tag: &str) -> bool {
    let tag = tag.to_ascii_lowercase();
    INTERACTIVE_TAGS.contains(&tag.as_str())
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Armed {
    start: PointerSample,
    suppressed: bool,
}

/// Armed/idle tracker for a single touch sequence.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    config: GestureConfig,
    region: StartRegion,
    armed: Option<Armed>,
}

impl GestureTracker {
    pub fn new(config: GestureConfig, region: StartRegion) -> Self {
        Self {
            config,
            region,
            armed: None,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Arms the tracker. Multi-touch starts are ignored and leave it idle.
    ///
    /// `suppressed` marks a start on an interactive element: the sequence is
    /// still tracked so it is consumed, but it will never classify.
    pub fn begin(&mut self, start: PointerSample, touch_count: usize, suppressed: bool) {
        if touch_count != 1 {
            self.armed = None;
            return;
        }
        self.armed = Some(Armed { start, suppressed });
    }

    /// Whether an in-flight move should be captured to stop the page scrolling
    /// under a horizontal right drag.
    pub fn should_capture_move(&self, current: PointerSample) -> bool {
        let Some(armed) = self.armed else {
            return false;
        };
        let dx = current.x - armed.start.x;
        let dy = current.y - armed.start.y;
        dx > 12.0 && dx.abs() > dy.abs() * self.config.axis_dominance
    }

    /// Consumes the active gesture and classifies it.
    pub fn finish(&mut self, end: PointerSample, viewport_width: f64) -> Option<Swipe> {
        let armed = self.armed.take()?;
        if armed.suppressed || !self.region.contains(armed.start.x, viewport_width) {
            return None;
        }
        GestureRecord::new(armed.start, end).classify(&self.config)
    }

    pub fn cancel(&mut self) {
        self.armed = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(dx: f64, dy: f64, elapsed: f64) -> GestureRecord {
        GestureRecord::new(
            PointerSample::touch(200.0, 300.0, 1000.0),
            PointerSample::touch(200.0 + dx, 300.0 + dy, 1000.0 + elapsed),
        )
    }

    #[test]
    fn test_classifies_dominant_axis() {
        let config = GestureConfig::default();
        assert_eq!(record(-100.0, 10.0, 300.0).classify(&config), Some(Swipe::Left));
        assert_eq!(record(10.0, -100.0, 300.0).classify(&config), Some(Swipe::Up));
        assert_eq!(record(120.0, -20.0, 300.0).classify(&config), Some(Swipe::Right));
    }

    #[test]
    fn test_rejects_weak_dominance() {
        // 100 / 90 = 1.11, under the 1.2 ratio
        let config = GestureConfig::default();
        assert_eq!(record(-100.0, 90.0, 300.0).classify(&config), None);
        assert_eq!(record(90.0, -100.0, 300.0).classify(&config), None);
    }

    #[test]
    fn test_rejects_short_or_slow() {
        let config = GestureConfig::default();
        assert_eq!(record(-80.0, 0.0, 300.0).classify(&config), None);
        assert_eq!(record(-300.0, 0.0, 1200.5).classify(&config), None);
        assert_eq!(record(-300.0, 0.0, 5000.0).classify(&config), None);
        assert_eq!(record(-300.0, 0.0, 1200.0).classify(&config), Some(Swipe::Left));
    }

    #[test]
    fn test_down_is_never_a_swipe() {
        let config = GestureConfig::default();
        assert_eq!(record(0.0, 400.0, 200.0).classify(&config), None);
    }

    #[test]
    fn test_custom_config() {
        let config = GestureConfig {
            min_distance: 20.0,
            axis_dominance: 1.0,
            max_duration_ms: 100.0,
        };
        assert_eq!(record(-30.0, 25.0, 50.0).classify(&config), Some(Swipe::Left));
        assert_eq!(record(-30.0, 25.0, 150.0).classify(&config), None);
    }

    #[test]
    fn test_interactive_tags() {
        assert!(is_interactive_tag("A"));
        assert!(is_interactive_tag("button"));
        assert!(is_interactive_tag("TEXTAREA"));
        assert!(!is_interactive_tag("div"));
        assert!(!is_interactive_tag("section"));
    }

    #[test]
    fn test_tracker_suppressed_start() {
        let mut tracker = GestureTracker::new(GestureConfig::default(), StartRegion::Anywhere);
        tracker.begin(PointerSample::touch(300.0, 300.0, 0.0), 1, true);
        assert!(tracker.is_armed());
        let res = tracker.finish(PointerSample::touch(0.0, 300.0, 100.0), 400.0);
        assert_eq!(res, None);
        assert!(!tracker.is_armed());
    }

    #[test]
    fn test_tracker_classifies_once() {
        let mut tracker = GestureTracker::new(GestureConfig::default(), StartRegion::Anywhere);
        tracker.begin(PointerSample::touch(300.0, 300.0, 0.0), 1, false);
        let end = PointerSample::touch(100.0, 310.0, 200.0);
        assert_eq!(tracker.finish(end, 400.0), Some(Swipe::Left));
        // the record was consumed
        assert_eq!(tracker.finish(end, 400.0), None);
    }

    #[test]
    fn test_tracker_ignores_multi_touch() {
        let mut tracker = GestureTracker::new(GestureConfig::default(), StartRegion::Anywhere);
        tracker.begin(PointerSample::touch(300.0, 300.0, 0.0), 2, false);
        assert!(!tracker.is_armed());
        assert_eq!(
            tracker.finish(PointerSample::touch(0.0, 300.0, 100.0), 400.0),
            None
        );
    }

    #[test]
    fn test_tracker_start_region() {
        let mut tracker =
            GestureTracker::new(GestureConfig::default(), StartRegion::RightOf(0.55));
        tracker.begin(PointerSample::touch(100.0, 300.0, 0.0), 1, false);
        assert_eq!(
            tracker.finish(PointerSample::touch(0.0, 300.0, 100.0), 400.0),
            None
        );

        tracker.begin(PointerSample::touch(390.0, 300.0, 0.0), 1, false);
        assert_eq!(
            tracker.finish(PointerSample::touch(200.0, 300.0, 100.0), 400.0),
            Some(Swipe::Left)
        );
    }

    #[test]
    fn test_capture_move() {
        let mut tracker = GestureTracker::new(GestureConfig::default(), StartRegion::Anywhere);
        let moved = PointerSample::touch(40.0, 5.0, 10.0);
        assert!(!tracker.should_capture_move(moved));

        tracker.begin(PointerSample::touch(0.0, 0.0, 0.0), 1, false);
        assert!(tracker.should_capture_move(moved));
        assert!(!tracker.should_capture_move(PointerSample::touch(10.0, 0.0, 10.0)));
        assert!(!tracker.should_capture_move(PointerSample::touch(-40.0, 0.0, 10.0)));
        assert!(!tracker.should_capture_move(PointerSample::touch(20.0, 30.0, 10.0)));

        tracker.cancel();
        assert!(!tracker.should_capture_move(moved));
    }

    #[test]
    fn test_pointer_kind_from_str() {
        assert_eq!(PointerKind::from("touch"), PointerKind::Touch);
        assert_eq!(PointerKind::from("pen"), PointerKind::Pen);
        assert_eq!(PointerKind::from("mouse"), PointerKind::Mouse);
        assert_eq!(PointerKind::from(""), PointerKind::Mouse);
    }
}
