//! Domain to pixel mappings for the category (time) and value axes.

use super::nearest::nearest_index;

/// Maps an ordered list of labels onto evenly spaced pixel positions.
///
/// Matches the usual "point scale": the first label lands on the start of
/// the range and the last label on its end. A single label is centred.
#[derive(Debug, Clone, PartialEq)]
pub struct PointScale {
    labels: Vec<String>,
    start: f32,
    step: f32,
}

impl PointScale {
    pub fn new<I, S>(labels: I, range: (f32, f32)) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let (lo, hi) = range;
        let n = labels.len();
        let step = (hi - lo) / (n.saturating_sub(1)).max(1) as f32;
        // Centre the points when there is less than two of them.
        let start = lo + (hi - lo - step * n.saturating_sub(1) as f32) * 0.5;
        Self { labels, start, step }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Pixel x of the label at `index`.
    pub fn position(&self, index: usize) -> Option<f32> {
        (index < self.labels.len()).then(|| self.start + self.step * index as f32)
    }

    /// Pixel x of `label`, if it is part of the domain.
    pub fn map(&self, label: &str) -> Option<f32> {
        self.labels
            .iter()
            .position(|l| l == label)
            .and_then(|i| self.position(i))
    }

    pub fn positions(&self) -> Vec<f32> {
        (0..self.labels.len())
            .filter_map(|i| self.position(i))
            .collect()
    }

    /// Index of the label whose pixel x is closest to `x`.
    pub fn invert(&self, x: f32) -> Option<usize> {
        nearest_index(&self.positions(), x)
    }
}

/// Linear mapping between a numeric domain and a pixel range. Not clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f32, f32),
    range: (f32, f32),
}

impl LinearScale {
    pub fn new(domain: (f32, f32), range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    /// Fixed `0..=100` percentage scale.
    pub fn percent(range: (f32, f32)) -> Self {
        Self::new((0.0, 100.0), range)
    }

    pub fn map(&self, value: f32) -> f32 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) * 0.5;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_scale_spans_range() {
        let scale = PointScale::new(["a", "b", "c", "d", "e"], (48.0, 788.0));
        assert_eq!(scale.step(), 185.0);
        assert_eq!(scale.map("a"), Some(48.0));
        assert_eq!(scale.map("c"), Some(418.0));
        assert_eq!(scale.map("e"), Some(788.0));
        assert_eq!(scale.map("missing"), None);
    }

    #[test]
    fn point_scale_centres_single_label() {
        let scale = PointScale::new(["only"], (0.0, 100.0));
        assert_eq!(scale.position(0), Some(50.0));
        assert_eq!(scale.position(1), None);
    }

    #[test]
    fn point_scale_empty_domain() {
        let scale = PointScale::new(Vec::<String>::new(), (0.0, 100.0));
        assert!(scale.is_empty());
        assert!(scale.positions().is_empty());
        assert_eq!(scale.invert(10.0), None);
    }

    #[test]
    fn point_scale_invert_picks_nearest() {
        let scale = PointScale::new(["a", "b", "c"], (0.0, 100.0));
        assert_eq!(scale.invert(-40.0), Some(0));
        assert_eq!(scale.invert(30.0), Some(1));
        assert_eq!(scale.invert(76.0), Some(2));
        assert_eq!(scale.invert(500.0), Some(2));
    }

    #[test]
    fn percent_scale_is_inverted() {
        let scale = LinearScale::percent((284.0, 12.0));
        assert_eq!(scale.map(0.0), 284.0);
        assert_eq!(scale.map(100.0), 12.0);
        assert_eq!(scale.map(50.0), 148.0);
    }

    #[test]
    fn degenerate_linear_scale_does_not_divide_by_zero() {
        let scale = LinearScale::new((5.0, 5.0), (0.0, 10.0));
        assert_eq!(scale.map(5.0), 5.0);
        assert!(scale.map(3.0).is_finite());
    }
}
