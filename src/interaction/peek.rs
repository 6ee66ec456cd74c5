#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeekConfig {
    /// Scroll speed, in px/ms, that triggers a peek.
    pub speed_threshold: f64,
    pub peek_duration_ms: u64,
    /// Vertical placement window, in vh.
    pub top_min_vh: f64,
    pub top_max_vh: f64,
}

impl Default for PeekConfig {
    fn default() -> Self {
        Self {
            speed_threshold: 0.25,
            peek_duration_ms: 1100,
            top_min_vh: 15.0,
            top_max_vh: 85.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeekSide {
    Left,
    Right,
}

impl PeekSide {
    pub fn roll(r: f64) -> Self {
        if r < 0.5 {
            Self::Left
        } else {
            Self::Right
        }
    }
}

/// Smallest interval used for a speed estimate, one 60Hz frame.
const MIN_DT_MS: f64 = 16.0;

/// Scroll velocity estimator.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollSpeed {
    last_y: f64,
    last_t: f64,
}

impl ScrollSpeed {
    pub fn new(y: f64, t: f64) -> Self {
        Self {
            last_y: y,
            last_t: t,
        }
    }

    /// Records a sample and returns speed since the previous one, in px/ms.
    pub fn sample(&mut self, y: f64, t: f64) -> f64 {
        let dy = (y - self.last_y).abs();
        let dt = (t - self.last_t).max(MIN_DT_MS);
        self.last_y = y;
        self.last_t = t;
        dy / dt
    }
}

/// Image pool for peekers, never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct PeekPool {
    images: Vec<String>,
    fallback: String,
}

impl PeekPool {
    pub fn new(images: Vec<String>, fallback: impl Into<String>) -> Self {
        Self {
            images,
            fallback: fallback.into(),
        }
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Every distinct image the pool can show, fallback included.
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        let mut seen = Vec::with_capacity(self.images.len() + 1);
        self.images
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.fallback.as_str()))
            .filter(move |src| {
                if seen.contains(src) {
                    false
                } else {
                    seen.push(*src);
                    true
                }
            })
    }

    pub fn pick(&self, r: f64) -> &str {
        if self.images.is_empty() {
            return &self.fallback;
        }
        super::pick::<String>(&self.images, r)
    }

    /// Whether a failed image should be swapped for the fallback.
    pub fn needs_fallback(&self, failed_src: &str) -> bool {
        !failed_src.ends_with(&self.fallback)
    }
}

/// Peek trigger: at most one peek animates at a time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Peeker {
    config: PeekConfig,
    animating: bool,
}

impl Peeker {
    pub fn new(config: PeekConfig) -> Self {
        Self {
            config,
            animating: false,
        }
    }

    pub fn config(&self) -> &PeekConfig {
        &self.config
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Starts a peek when fast enough and idle. Returns the chosen side and top.
    pub fn try_start(&mut self, speed: f64, rng: &mut impl FnMut() -> f64) -> Option<(PeekSide, f64)> {
        if self.animating || speed <= self.config.speed_threshold {
            return None;
        }
        self.animating = true;
        let side = PeekSide::roll(rng());
        let span = self.config.top_max_vh - self.config.top_min_vh;
        let top = self.config.top_min_vh + rng() * span;
        Some((side, top))
    }

    pub fn finish(&mut self) {
        self.animating = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_speed() {
        let mut s = ScrollSpeed::new(0.0, 0.0);
        assert_eq!(s.sample(100.0, 100.0), 1.0);
        // a tiny dt is floored to one frame
        assert_eq!(s.sample(116.0, 101.0), 1.0);
        assert_eq!(s.sample(100.0, 201.0), 0.16);
    }

    #[test]
    fn test_one_peek_at_a_time() {
        let mut p = Peeker::new(PeekConfig::default());
        let mut rng = || 0.0;
        assert_eq!(p.try_start(0.1, &mut rng), None);
        assert_eq!(p.try_start(0.25, &mut rng), None);
        assert_eq!(p.try_start(0.3, &mut rng), Some((PeekSide::Left, 15.0)));
        assert!(p.is_animating());
        assert_eq!(p.try_start(5.0, &mut rng), None);
        p.finish();
        let mut rng = || 0.75;
        let (side, top) = p.try_start(5.0, &mut rng).unwrap();
        assert_eq!(side, PeekSide::Right);
        assert!((top - 67.5).abs() < 1e-9);
    }

    #[test]
    fn test_pool() {
        let pool = PeekPool::new(vec![], "/image/cm.png");
        assert_eq!(pool.pick(0.7), "/image/cm.png");

        let pool = PeekPool::new(
            vec!["/image/a.png".to_string(), "/image/b.png".to_string()],
            "/image/cm.png",
        );
        assert_eq!(pool.pick(0.2), "/image/a.png");
        assert_eq!(pool.pick(0.9), "/image/b.png");
        assert!(pool.needs_fallback("https://site.dev/image/a.png"));
        assert!(!pool.needs_fallback("https://site.dev/image/cm.png"));
    }

    #[test]
    fn test_pool_sources_dedup() {
        let pool = PeekPool::new(
            vec![
                "/image/a.png".to_string(),
                "/image/cm.png".to_string(),
                "/image/a.png".to_string(),
            ],
            "/image/cm.png",
        );
        let sources = pool.sources().collect::<Vec<_>>();
        assert_eq!(sources, vec!["/image/a.png", "/image/cm.png"]);
    }
}
