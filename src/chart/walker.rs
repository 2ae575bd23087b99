//! Finds how far along the curve a given screen x lies and samples the
//! curve up to there.
//!
//! Precondition: x must be non-decreasing along the path's arc length.
//! That holds for a curve drawn over a time axis, not for arbitrary curves.

use serde::{Deserialize, Serialize};

use super::curve::CurvePath;
use super::sample::PixelPoint;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Bisection steps over arc length.
    pub search_iterations: u32,
    /// Arc length between consecutive traced points.
    pub step: f32,
    /// Marker spin at full progress, in degrees.
    pub spin_degrees: f32,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            search_iterations: 20,
            step: 2.0,
            spin_degrees: 720.0,
        }
    }
}

/// The part of the curve from its start to the cutoff nearest a target x.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trace {
    pub points: Vec<PixelPoint>,
    pub total_length: f32,
    /// Arc length of the cutoff, `<= total_length`.
    pub glow_end: f32,
    /// Marker spin in degrees, proportional to progress along the path.
    pub rotation: f32,
    /// Direction of the last traced step in degrees, if there are two points.
    pub facing: Option<f32>,
}

impl Trace {
    pub fn last(&self) -> Option<PixelPoint> {
        self.points.last().copied()
    }
}

/// Arc length at which the path's x crosses `target_x`, by bisection.
pub fn find_length_at_x(path: &CurvePath, target_x: f32, iterations: u32) -> f32 {
    let total = path.total_length();
    let mut low = 0.0;
    let mut high = total;
    let mut center = 0.0;
    for _ in 0..iterations {
        let mid = (low + high) * 0.5;
        match path.point_at_length(mid) {
            Some(p) if p.x < target_x => low = mid,
            _ => high = mid,
        }
        center = mid;
    }
    center
}

/// Samples `path` every `step` units of arc length over `[start, end]`.
pub fn sample_path(path: &CurvePath, start: f32, end: f32, step: f32) -> Vec<PixelPoint> {
    if end < start || !step.is_finite() || step <= 0.0 {
        return Vec::new();
    }
    let count = ((end - start) / step).floor() as usize;
    (0..=count)
        .filter_map(|i| path.point_at_length(start + i as f32 * step))
        .collect()
}

/// Walks `path` up to `target_x`.
///
/// Returns `None` when there is no geometry yet. A zero-length path yields
/// an empty trace.
pub fn walk(path: &CurvePath, target_x: f32, config: &TraceConfig) -> Option<Trace> {
    if path.is_empty() {
        return None;
    }
    let total_length = path.total_length();
    if !(total_length > 0.0) || !target_x.is_finite() {
        return Some(Trace::default());
    }

    let center = find_length_at_x(path, target_x, config.search_iterations);
    let glow_end = total_length.min(center);
    let step = if config.step.is_finite() && config.step > 0.0 {
        config.step
    } else {
        TraceConfig::default().step
    };
    let points = sample_path(path, 0.0, glow_end, step);

    let rotation = glow_end / total_length * config.spin_degrees;
    let facing = match points.as_slice() {
        [.., prev, last] => Some((last.y - prev.y).atan2(last.x - prev.x).to_degrees()),
        _ => None,
    };

    Some(Trace {
        points,
        total_length,
        glow_end,
        rotation,
        facing,
    })
}
