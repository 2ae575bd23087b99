use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PulseConfig {
    pub low: f32,
    pub high: f32,
    /// Length of one leg (low to high, or back), in seconds.
    pub duration_secs: f32,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            low: 0.4,
            high: 1.0,
            duration_secs: 1.0,
        }
    }
}

/// Endless low -> high -> low oscillation, computed from elapsed time.
#[derive(Debug, Clone, PartialEq)]
pub struct Pulse {
    config: PulseConfig,
    elapsed: f32,
}

impl Pulse {
    pub fn new(config: PulseConfig) -> Self {
        Self {
            config,
            elapsed: 0.0,
        }
    }

    pub fn set_config(&mut self, config: PulseConfig) {
        self.config = config;
    }

    pub fn advance(&mut self, dt: f32) -> f32 {
        if dt > 0.0 {
            self.elapsed += dt;
            let cycle = self.cycle();
            if cycle > 0.0 {
                self.elapsed %= cycle;
            }
        }
        self.value()
    }

    pub fn value(&self) -> f32 {
        Self::value_at(&self.config, self.elapsed)
    }

    fn cycle(&self) -> f32 {
        2.0 * self.config.duration_secs
    }

    /// Pulse value `secs` after the start.
    pub fn value_at(config: &PulseConfig, secs: f32) -> f32 {
        let PulseConfig {
            low,
            high,
            duration_secs,
        } = *config;
        if !(duration_secs > 0.0) {
            return high;
        }
        let phase = (secs / duration_secs).rem_euclid(2.0);
        let t = if phase <= 1.0 { phase } else { 2.0 - phase };
        low + (high - low) * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oscillates_between_levels() {
        let config = PulseConfig::default();
        assert!((Pulse::value_at(&config, 0.0) - 0.4).abs() < 1e-6);
        assert!((Pulse::value_at(&config, 0.5) - 0.7).abs() < 1e-6);
        assert!((Pulse::value_at(&config, 1.0) - 1.0).abs() < 1e-6);
        assert!((Pulse::value_at(&config, 1.5) - 0.7).abs() < 1e-6);
        assert!((Pulse::value_at(&config, 2.0) - 0.4).abs() < 1e-6);
        assert!((Pulse::value_at(&config, 7.0) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn advancing_never_leaves_the_band() {
        let mut pulse = Pulse::new(PulseConfig::default());
        for _ in 0..10_000 {
            let v = pulse.advance(1.0 / 60.0);
            assert!((0.4 - 1e-5..=1.0 + 1e-5).contains(&v));
        }
    }

    #[test]
    fn zero_duration_holds_high() {
        let config = PulseConfig {
            duration_secs: 0.0,
            ..Default::default()
        };
        assert_eq!(Pulse::value_at(&config, 3.0), 1.0);
    }
}
