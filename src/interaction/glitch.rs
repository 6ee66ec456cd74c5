#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlitchConfig {
    pub burst_ms: u64,
    pub min_gap_ms: f64,
    pub gap_jitter_ms: f64,
}

impl Default for GlitchConfig {
    fn default() -> Self {
        Self {
            burst_ms: 600,
            min_gap_ms: 3000.0,
            gap_jitter_ms: 4000.0,
        }
    }
}

impl GlitchConfig {
    /// Delay until the next scheduled glitch.
    pub fn next_gap_ms(&self, r: f64) -> u64 {
        (self.min_gap_ms + r.clamp(0.0, 1.0) * self.gap_jitter_ms) as u64
    }
}

pub const GLITCH_CLASS: &str = "glitch";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gap_window() {
        let config = GlitchConfig::default();
        assert_eq!(config.next_gap_ms(0.0), 3000);
        assert_eq!(config.next_gap_ms(0.5), 5000);
        assert!(config.next_gap_ms(0.999_999) < 7000);
        assert_eq!(config.next_gap_ms(4.0), 7000);
    }
}
