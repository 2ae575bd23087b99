mod driver;
mod pulse;
mod spring;

pub use driver::*;
pub use pulse::*;
pub use spring::*;

use serde::{Deserialize, Serialize};

/// Tuning for every animated value of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Marker position, following the nearest sample.
    pub position: SpringConfig,
    /// Trailing cutoff of the area fill.
    pub glow: SpringConfig,
    pub rotation: SpringConfig,
    pub facing: SpringConfig,
    pub hover_opacity: SpringConfig,
    pub flare: PulseConfig,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            position: SpringConfig::default(),
            glow: SpringConfig::loose(),
            rotation: SpringConfig::default(),
            facing: SpringConfig::default(),
            hover_opacity: SpringConfig::default(),
            flare: PulseConfig::default(),
        }
    }
}
