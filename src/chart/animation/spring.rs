use serde::{Deserialize, Serialize};

/// Integration step. Small enough to stay stable for any sane tuning.
const STEP_SECS: f32 = 0.001;

/// Longest frame gap simulated in one go; longer stalls are truncated.
const MAX_FRAME_SECS: f32 = 0.064;

/// Tuning of a damped spring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    /// Distance from the target under which the spring may come to rest.
    pub precision: f32,
}

impl SpringConfig {
    pub const fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
            precision: 0.01,
        }
    }

    /// Slow, overdamped settle.
    pub const fn loose() -> Self {
        Self::new(60.0, 50.0)
    }

    fn rest_velocity(&self) -> f32 {
        // 1/10th of the precision per millisecond.
        self.precision * 100.0
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::new(170.0, 26.0)
    }
}

/// A scalar that chases its target like a mass on a damped spring.
///
/// Retargeting keeps the current velocity, so in-flight motion bends
/// towards the new target instead of restarting. The state is integrated in
/// `f64`: in `f32` the 1 ms position increments of a slow spring fall below
/// one ulp near the target and the value stalls short of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    value: f64,
    velocity: f64,
    target: f64,
    config: SpringConfig,
}

impl Spring {
    pub fn new(value: f32, config: SpringConfig) -> Self {
        Self {
            value: value as f64,
            velocity: 0.0,
            target: value as f64,
            config,
        }
    }

    pub fn value(&self) -> f32 {
        self.value as f32
    }

    pub fn target(&self) -> f32 {
        self.target as f32
    }

    pub fn velocity(&self) -> f32 {
        self.velocity as f32
    }

    pub fn set_config(&mut self, config: SpringConfig) {
        self.config = config;
    }

    pub fn set_target(&mut self, target: f32) {
        if target.is_finite() {
            self.target = target as f64;
        }
    }

    /// Jumps straight to `value` and stops.
    pub fn snap_to(&mut self, value: f32) {
        self.value = value as f64;
        self.target = self.value;
        self.velocity = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Advances the simulation by `dt` seconds and returns the new value.
    pub fn advance(&mut self, dt: f32) -> f32 {
        if self.is_settled() || !(dt > 0.0) {
            return self.value();
        }
        let stiffness = self.config.stiffness as f64;
        let damping = self.config.damping as f64;
        let mass = if self.config.mass > 0.0 {
            self.config.mass as f64
        } else {
            1.0
        };
        // Never ask for more than the target's own f32 resolution.
        let precision = (self.config.precision as f64)
            .max(self.target.abs() * f32::EPSILON as f64 * 4.0);
        let rest_velocity = self.config.rest_velocity() as f64;
        let step = STEP_SECS as f64;

        let steps = (dt.min(MAX_FRAME_SECS) / STEP_SECS).ceil() as usize;
        for _ in 0..steps {
            if self.velocity.abs() <= rest_velocity
                && (self.target - self.value).abs() <= precision
            {
                self.value = self.target;
                self.velocity = 0.0;
                break;
            }
            let spring_force = -stiffness * (self.value - self.target);
            let damping_force = -damping * self.velocity;
            let acceleration = (spring_force + damping_force) / mass;
            self.velocity += acceleration * step;
            self.value += self.velocity * step;
        }
        self.value()
    }
}
