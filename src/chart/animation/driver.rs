use super::{AnimationConfig, Pulse, Spring};

/// Values read by the renderer for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    pub x: f32,
    pub y: f32,
    pub glow_x: f32,
    pub rotation: f32,
    pub facing: f32,
    pub hover_opacity: f32,
    pub flare: f32,
}

/// Owns the chart's animated scalars. Each one only moves towards a target;
/// nothing here reads pointer input directly.
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    x: Spring,
    y: Spring,
    glow_x: Spring,
    rotation: Spring,
    facing: Spring,
    hover_opacity: Spring,
    flare: Pulse,
}

impl AnimationDriver {
    /// Starts at rest on `(x, y)`, hidden, unrotated.
    pub fn new(config: &AnimationConfig, x: f32, y: f32) -> Self {
        Self {
            x: Spring::new(x, config.position),
            y: Spring::new(y, config.position),
            glow_x: Spring::new(x, config.glow),
            rotation: Spring::new(0.0, config.rotation),
            facing: Spring::new(0.0, config.facing),
            hover_opacity: Spring::new(0.0, config.hover_opacity),
            flare: Pulse::new(config.flare),
        }
    }

    pub fn apply_config(&mut self, config: &AnimationConfig) {
        self.x.set_config(config.position);
        self.y.set_config(config.position);
        self.glow_x.set_config(config.glow);
        self.rotation.set_config(config.rotation);
        self.facing.set_config(config.facing);
        self.hover_opacity.set_config(config.hover_opacity);
        self.flare.set_config(config.flare);
    }

    /// Points the position springs (and the trailing glow) at a new sample.
    pub fn set_point(&mut self, x: f32, y: f32) {
        self.x.set_target(x);
        self.y.set_target(y);
        self.glow_x.set_target(x);
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hover_opacity
            .set_target(if hovering { 1.0 } else { 0.0 });
    }

    pub fn set_rotation(&mut self, degrees: f32) {
        self.rotation.set_target(degrees);
    }

    /// Keeps the previous angle when no new one could be derived.
    pub fn set_facing(&mut self, degrees: Option<f32>) {
        if let Some(degrees) = degrees {
            self.facing.set_target(degrees);
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.x.advance(dt);
        self.y.advance(dt);
        self.glow_x.advance(dt);
        self.rotation.advance(dt);
        self.facing.advance(dt);
        self.hover_opacity.advance(dt);
        self.flare.advance(dt);
    }

    pub fn x(&self) -> f32 {
        self.x.value()
    }

    pub fn y(&self) -> f32 {
        self.y.value()
    }

    pub fn target_y(&self) -> f32 {
        self.y.target()
    }

    /// Whether every spring is at rest. The flare never rests.
    pub fn is_settled(&self) -> bool {
        [
            &self.x,
            &self.y,
            &self.glow_x,
            &self.rotation,
            &self.facing,
            &self.hover_opacity,
        ]
        .iter()
        .all(|s| s.is_settled())
    }

    pub fn frame(&self) -> AnimationFrame {
        AnimationFrame {
            x: self.x.value(),
            y: self.y.value(),
            glow_x: self.glow_x.value(),
            rotation: self.rotation.value(),
            facing: self.facing.value(),
            hover_opacity: self.hover_opacity.value(),
            flare: self.flare.value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(driver: &mut AnimationDriver, secs: f32) {
        for _ in 0..(secs * 60.0) as usize {
            driver.advance(1.0 / 60.0);
        }
    }

    #[test]
    fn starts_at_rest_and_hidden() {
        let driver = AnimationDriver::new(&AnimationConfig::default(), 48.0, 200.0);
        let frame = driver.frame();
        assert_eq!(frame.x, 48.0);
        assert_eq!(frame.glow_x, 48.0);
        assert_eq!(frame.hover_opacity, 0.0);
        assert!((frame.flare - 0.4).abs() < 1e-6);
        assert!(driver.is_settled());
    }

    #[test]
    fn glow_trails_position() {
        let mut driver = AnimationDriver::new(&AnimationConfig::default(), 48.0, 200.0);
        driver.set_point(400.0, 100.0);
        run(&mut driver, 0.5);
        let frame = driver.frame();
        assert!(frame.glow_x < frame.x);
        run(&mut driver, 20.0);
        let frame = driver.frame();
        assert_eq!(frame.x, 400.0);
        assert_eq!(frame.y, 100.0);
        assert_eq!(frame.glow_x, 400.0);
        assert!(driver.is_settled());
    }

    #[test]
    fn hover_fades_in_and_out() {
        let mut driver = AnimationDriver::new(&AnimationConfig::default(), 0.0, 0.0);
        driver.set_hovering(true);
        run(&mut driver, 2.0);
        assert_eq!(driver.frame().hover_opacity, 1.0);
        driver.set_hovering(false);
        run(&mut driver, 2.0);
        assert_eq!(driver.frame().hover_opacity, 0.0);
    }

    #[test]
    fn missing_facing_keeps_previous_target() {
        let mut driver = AnimationDriver::new(&AnimationConfig::default(), 0.0, 0.0);
        driver.set_facing(Some(30.0));
        driver.set_facing(None);
        run(&mut driver, 2.0);
        assert_eq!(driver.frame().facing, 30.0);
    }
}
