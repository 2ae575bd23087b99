//! Smooth curve through the sample points, with arc-length queries.
//!
//! The curve is a chain of cubic Bézier segments produced by Catmull-Rom
//! interpolation with a configurable `alpha` (0 uniform, 0.5 centripetal,
//! 1 chordal). Each segment carries a cumulative chord-length table so that
//! `total_length` and `point_at_length` agree with each other exactly.

use super::sample::PixelPoint;

/// Subdivisions per segment for the arc-length table.
const LENGTH_TABLE_STEPS: usize = 64;

const EPSILON: f32 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub from: PixelPoint,
    pub ctrl1: PixelPoint,
    pub ctrl2: PixelPoint,
    pub to: PixelPoint,
}

impl CubicBezier {
    /// Straight line expressed as a cubic with evenly spaced controls.
    pub fn line(from: PixelPoint, to: PixelPoint) -> Self {
        Self {
            from,
            ctrl1: from.lerp(to, 1.0 / 3.0),
            ctrl2: from.lerp(to, 2.0 / 3.0),
            to,
        }
    }

    pub fn eval(&self, t: f32) -> PixelPoint {
        let mt = 1.0 - t;
        let a = mt * mt * mt;
        let b = 3.0 * mt * mt * t;
        let c = 3.0 * mt * t * t;
        let d = t * t * t;
        PixelPoint {
            x: a * self.from.x + b * self.ctrl1.x + c * self.ctrl2.x + d * self.to.x,
            y: a * self.from.y + b * self.ctrl1.y + c * self.ctrl2.y + d * self.to.y,
        }
    }
}

#[derive(Debug, Clone)]
struct Segment {
    bezier: CubicBezier,
    /// Cumulative length at `t = i / LENGTH_TABLE_STEPS`.
    lengths: Vec<f32>,
}

impl Segment {
    fn new(bezier: CubicBezier) -> Self {
        let mut lengths = Vec::with_capacity(LENGTH_TABLE_STEPS + 1);
        let mut acc = 0.0;
        let mut prev = bezier.from;
        lengths.push(0.0);
        for i in 1..=LENGTH_TABLE_STEPS {
            let p = bezier.eval(i as f32 / LENGTH_TABLE_STEPS as f32);
            acc += prev.distance(p);
            lengths.push(acc);
            prev = p;
        }
        Self { bezier, lengths }
    }

    fn length(&self) -> f32 {
        self.lengths[LENGTH_TABLE_STEPS]
    }

    fn point_at_length(&self, s: f32) -> PixelPoint {
        let total = self.length();
        if total <= EPSILON {
            return self.bezier.from;
        }
        let s = s.clamp(0.0, total);
        let i = self
            .lengths
            .partition_point(|&l| l < s)
            .clamp(1, LENGTH_TABLE_STEPS);
        let (l0, l1) = (self.lengths[i - 1], self.lengths[i]);
        let frac = if l1 - l0 > EPSILON {
            (s - l0) / (l1 - l0)
        } else {
            0.0
        };
        let t = (i as f32 - 1.0 + frac) / LENGTH_TABLE_STEPS as f32;
        self.bezier.eval(t)
    }
}

/// A rendered curve: a start point followed by cubic segments.
#[derive(Debug, Clone, Default)]
pub struct CurvePath {
    start: Option<PixelPoint>,
    segments: Vec<Segment>,
    /// Cumulative arc length at the end of each segment.
    ends: Vec<f32>,
}

impl CurvePath {
    pub fn new(start: PixelPoint) -> Self {
        Self {
            start: Some(start),
            ..Default::default()
        }
    }

    /// Appends a segment. Its start is assumed to be the current end point.
    pub fn push(&mut self, bezier: CubicBezier) {
        if self.start.is_none() {
            self.start = Some(bezier.from);
        }
        let segment = Segment::new(bezier);
        self.ends.push(self.total_length() + segment.length());
        self.segments.push(segment);
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none()
    }

    pub fn start(&self) -> Option<PixelPoint> {
        self.start
    }

    pub fn end(&self) -> Option<PixelPoint> {
        self.segments.last().map(|s| s.bezier.to).or(self.start)
    }

    pub fn segments(&self) -> impl Iterator<Item = &CubicBezier> {
        self.segments.iter().map(|s| &s.bezier)
    }

    pub fn total_length(&self) -> f32 {
        self.ends.last().copied().unwrap_or(0.0)
    }

    /// Point at arc length `s` from the start, clamped to the path.
    pub fn point_at_length(&self, s: f32) -> Option<PixelPoint> {
        let start = self.start?;
        if self.segments.is_empty() || !s.is_finite() {
            return Some(start);
        }
        let idx = self
            .ends
            .partition_point(|&end| end < s)
            .min(self.segments.len() - 1);
        let offset = if idx == 0 { 0.0 } else { self.ends[idx - 1] };
        Some(self.segments[idx].point_at_length(s - offset))
    }

    /// Dense polyline following the curve, for stroking.
    pub fn flatten(&self) -> Vec<PixelPoint> {
        let Some(start) = self.start else {
            return Vec::new();
        };
        let mut out = Vec::with_capacity(1 + self.segments.len() * LENGTH_TABLE_STEPS);
        out.push(start);
        for segment in &self.segments {
            out.extend(
                (1..=LENGTH_TABLE_STEPS)
                    .map(|i| segment.bezier.eval(i as f32 / LENGTH_TABLE_STEPS as f32)),
            );
        }
        out
    }
}

/// Catmull-Rom interpolation through `points`, emitted as cubic Béziers.
///
/// End segments reuse their endpoint as the missing neighbour. Two points
/// give a straight line and a single point a zero-length path.
pub fn catmull_rom(points: &[PixelPoint], alpha: f32) -> CurvePath {
    let Some(&first) = points.first() else {
        return CurvePath::default();
    };
    let mut path = CurvePath::new(first);
    if let [a, b] = points {
        path.push(CubicBezier::line(*a, *b));
        return path;
    }
    for i in 0..points.len().saturating_sub(1) {
        let p0 = i.checked_sub(1).map(|j| points[j]);
        let p3 = points.get(i + 2).copied();
        path.push(catmull_rom_segment(p0, points[i], points[i + 1], p3, alpha));
    }
    path
}

fn catmull_rom_segment(
    p0: Option<PixelPoint>,
    p1: PixelPoint,
    p2: PixelPoint,
    p3: Option<PixelPoint>,
    alpha: f32,
) -> CubicBezier {
    // (d^2)^alpha and its square root, d^alpha.
    let weights = |a: PixelPoint, b: PixelPoint| {
        let d2 = (b.x - a.x).powi(2) + (b.y - a.y).powi(2);
        let l_2a = d2.powf(alpha);
        (l_2a.sqrt(), l_2a)
    };
    let (l12_a, l12_2a) = weights(p1, p2);

    let mut ctrl1 = p1;
    if let Some(p0) = p0 {
        let (l01_a, l01_2a) = weights(p0, p1);
        if l01_a > EPSILON {
            let a = 2.0 * l01_2a + 3.0 * l01_a * l12_a + l12_2a;
            let n = 3.0 * l01_a * (l01_a + l12_a);
            ctrl1 = PixelPoint {
                x: (p1.x * a - p0.x * l12_2a + p2.x * l01_2a) / n,
                y: (p1.y * a - p0.y * l12_2a + p2.y * l01_2a) / n,
            };
        }
    }

    let mut ctrl2 = p2;
    if let Some(p3) = p3 {
        let (l23_a, l23_2a) = weights(p2, p3);
        if l23_a > EPSILON {
            let b = 2.0 * l23_2a + 3.0 * l23_a * l12_a + l12_2a;
            let m = 3.0 * l23_a * (l23_a + l12_a);
            ctrl2 = PixelPoint {
                x: (p2.x * b + p1.x * l23_2a - p3.x * l12_2a) / m,
                y: (p2.y * b + p1.y * l23_2a - p3.y * l12_2a) / m,
            };
        }
    }

    CubicBezier {
        from: p1,
        ctrl1,
        ctrl2,
        to: p2,
    }
}
