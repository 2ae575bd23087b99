use log::{debug, trace};

use crate::chart::{
    catmull_rom, walk, AnimationDriver, AnimationFrame, ChartConfig, CurvePath,
    FrameHandle, FrameLoop, LinearScale, PixelPoint, PointScale, PointerEvent, PointerTracker,
    Sample, Trace,
};

/// Headless state of the glow line chart.
///
/// Pointer events pick the nearest sample, which retargets the animation
/// springs. Every frame the springs advance and the curve is re-walked up
/// to the animated x, producing the glowing trace.
pub struct GlowChart {
    pub(super) config: ChartConfig,
    samples: Vec<Sample>,
    x_scale: PointScale,
    y_scale: LinearScale,
    path: CurvePath,
    pointer: PointerTracker,
    nearest: Option<usize>,
    pub(super) animation: AnimationDriver,
    trace: Trace,
    /// Last traced point once the trace has a direction.
    marker: Option<PixelPoint>,
    frame_loop: FrameLoop,
    handle: Option<FrameHandle>,
    pub(super) marker_texture: Option<egui::TextureHandle>,
}

impl GlowChart {
    pub fn new(samples: Vec<Sample>, config: ChartConfig) -> Self {
        let x_scale = PointScale::new(
            samples.iter().map(|s| s.label.clone()),
            config.layout.x_range(),
        );
        let y_scale = LinearScale::percent(config.layout.y_range());
        let path = build_path(&samples, &x_scale, &y_scale, config.curve_alpha);
        let pointer = PointerTracker::default();
        let nearest = x_scale.invert(pointer.x());
        let start = nearest
            .and_then(|i| point_of(&samples, &x_scale, &y_scale, i))
            .unwrap_or_else(|| {
                let (left, _) = config.layout.x_range();
                PixelPoint::new(left, y_scale.map(0.0))
            });
        let animation = AnimationDriver::new(&config.animation, start.x, start.y);

        Self {
            config,
            samples,
            x_scale,
            y_scale,
            path,
            pointer,
            nearest,
            animation,
            trace: Trace::default(),
            marker: None,
            frame_loop: FrameLoop::default(),
            handle: None,
            marker_texture: None,
        }
    }

    /// Starts the per-frame loop, replacing any running one.
    pub fn mount(&mut self) {
        self.handle = Some(self.frame_loop.start());
    }

    /// Stops the per-frame loop. Later frames are no-ops.
    pub fn unmount(&mut self) {
        self.frame_loop.stop();
        self.handle = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.handle
            .is_some_and(|handle| self.frame_loop.is_live(handle))
    }

    /// Applies new settings; geometry changes rebuild the scales and curve
    /// and restart the frame loop.
    pub fn set_config(&mut self, config: ChartConfig) {
        if config == self.config {
            return;
        }
        self.animation.apply_config(&config.animation);
        if config.marker_path != self.config.marker_path {
            self.marker_texture = None;
        }
        let rebuild = self.config.geometry_differs(&config);
        self.config = config;
        if rebuild {
            debug!("chart geometry changed, rebuilding curve");
            self.x_scale = PointScale::new(
                self.samples.iter().map(|s| s.label.clone()),
                self.config.layout.x_range(),
            );
            self.y_scale = LinearScale::percent(self.config.layout.y_range());
            self.path = build_path(
                &self.samples,
                &self.x_scale,
                &self.y_scale,
                self.config.curve_alpha,
            );
            self.resolve_nearest();
            if self.is_mounted() {
                self.mount();
            }
        }
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) {
        let change = self.pointer.handle(event);
        if change.hover_changed {
            self.animation.set_hovering(self.pointer.is_hovering());
        }
        if change.moved {
            self.resolve_nearest();
        }
    }

    fn resolve_nearest(&mut self) {
        let nearest = self.x_scale.invert(self.pointer.x());
        if nearest != self.nearest {
            trace!("nearest sample {:?} -> {:?}", self.nearest, nearest);
        }
        self.nearest = nearest;
        if let Some(p) = nearest.and_then(|i| self.sample_point(i)) {
            self.animation.set_point(p.x, p.y);
        }
    }

    /// Advances animations by `dt` seconds and re-walks the curve.
    ///
    /// Returns `false` without touching anything when not mounted.
    pub fn frame(&mut self, dt: f32) -> bool {
        let Some(handle) = self.handle else {
            return false;
        };
        let Self {
            frame_loop,
            animation,
            path,
            config,
            trace,
            marker,
            ..
        } = self;
        frame_loop.run_frame(handle, || {
            animation.advance(dt);
            // No geometry yet: keep the previous trace.
            let Some(walked) = walk(path, animation.x(), &config.trace) else {
                return;
            };
            animation.set_rotation(walked.rotation);
            animation.set_facing(walked.facing);
            if walked.points.len() > 1 {
                *marker = walked.last();
            }
            *trace = walked;
        })
    }

    /// Pixel position of sample `index`.
    pub fn sample_point(&self, index: usize) -> Option<PixelPoint> {
        point_of(&self.samples, &self.x_scale, &self.y_scale, index)
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn x_scale(&self) -> &PointScale {
        &self.x_scale
    }

    pub fn y_scale(&self) -> &LinearScale {
        &self.y_scale
    }

    pub fn path(&self) -> &CurvePath {
        &self.path
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    pub fn nearest(&self) -> Option<usize> {
        self.nearest
    }

    pub fn nearest_sample(&self) -> Option<&Sample> {
        self.nearest.and_then(|i| self.samples.get(i))
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn marker(&self) -> Option<PixelPoint> {
        self.marker
    }

    pub fn animation(&self) -> &AnimationDriver {
        &self.animation
    }

    pub fn animation_frame(&self) -> AnimationFrame {
        self.animation.frame()
    }

    /// Frames run since creation.
    pub fn frames(&self) -> u64 {
        self.frame_loop.frames()
    }
}

impl Default for GlowChart {
    /// The bundled CPU series, not yet mounted.
    fn default() -> Self {
        Self::new(crate::chart::cpu_usage_samples(), ChartConfig::default())
    }
}

impl Drop for GlowChart {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn point_of(
    samples: &[Sample],
    x_scale: &PointScale,
    y_scale: &LinearScale,
    index: usize,
) -> Option<PixelPoint> {
    let sample = samples.get(index)?;
    let x = x_scale.position(index)?;
    Some(PixelPoint::new(x, y_scale.map(sample.value)))
}

fn build_path(
    samples: &[Sample],
    x_scale: &PointScale,
    y_scale: &LinearScale,
    alpha: f32,
) -> CurvePath {
    let points: Vec<PixelPoint> = (0..samples.len())
        .filter_map(|i| point_of(samples, x_scale, y_scale, i))
        .collect();
    catmull_rom(&points, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::cpu_usage_samples;

    fn chart() -> GlowChart {
        let mut chart = GlowChart::new(cpu_usage_samples(), ChartConfig::default());
        chart.mount();
        chart
    }

    #[test]
    fn empty_dataset_never_panics() {
        let mut chart = GlowChart::new(Vec::new(), ChartConfig::default());
        chart.mount();
        chart.handle_pointer(PointerEvent::Move { x: 300.0 });
        assert!(chart.frame(1.0 / 60.0));
        assert_eq!(chart.nearest(), None);
        assert!(chart.trace().points.is_empty());
        assert_eq!(chart.marker(), None);
    }

    #[test]
    fn frames_need_mount() {
        let mut chart = GlowChart::new(cpu_usage_samples(), ChartConfig::default());
        assert!(!chart.frame(1.0 / 60.0));
        chart.mount();
        assert!(chart.frame(1.0 / 60.0));
        assert_eq!(chart.frames(), 1);
    }

    #[test]
    fn hover_drives_opacity() {
        let mut chart = chart();
        chart.handle_pointer(PointerEvent::Enter);
        for _ in 0..120 {
            chart.frame(1.0 / 60.0);
        }
        assert_eq!(chart.animation_frame().hover_opacity, 1.0);
    }

    #[test]
    fn geometry_change_restarts_loop() {
        let mut chart = chart();
        let mut config = chart.config().clone();
        config.layout.width = 400.0;
        chart.set_config(config);
        assert!(chart.is_mounted());
        let last = chart.x_scale().position(30).unwrap();
        assert!((last - 388.0).abs() < 1e-3);
        assert!(chart.path().end().unwrap().x < 389.0);
    }
}
