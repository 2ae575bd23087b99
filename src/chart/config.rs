use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::animation::AnimationConfig;
use super::sample::ChartLayout;
use super::walker::TraceConfig;

/// Everything tunable about the chart. Persisted with the app settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // new fields fall back to defaults when loading old state
pub struct ChartConfig {
    pub layout: ChartLayout,
    pub animation: AnimationConfig,
    pub trace: TraceConfig,
    /// Catmull-Rom parametrisation of the curve.
    pub curve_alpha: f32,
    /// Image drawn as the marker; a generated blob is used when unset or
    /// unreadable.
    pub marker_path: Option<PathBuf>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            layout: ChartLayout::default(),
            animation: AnimationConfig::default(),
            trace: TraceConfig::default(),
            curve_alpha: 0.3,
            marker_path: None,
        }
    }
}

impl ChartConfig {
    /// Whether switching from `self` to `other` changes the drawn geometry.
    pub fn geometry_differs(&self, other: &ChartConfig) -> bool {
        self.layout != other.layout || self.curve_alpha != other.curve_alpha
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn old_state_without_new_fields_still_loads() {
        let config: ChartConfig = serde_json::from_str(r#"{"curve_alpha": 0.5}"#).unwrap();
        assert_eq!(config.curve_alpha, 0.5);
        assert_eq!(config.trace, TraceConfig::default());
        assert_eq!(config.animation, AnimationConfig::default());
    }

    #[test]
    fn spring_tuning_round_trips() {
        let mut config = ChartConfig::default();
        config.animation.glow.stiffness = 42.0;
        let json = serde_json::to_string(&config).unwrap();
        let back: ChartConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
