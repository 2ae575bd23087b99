use serde::{Deserialize, Serialize};

/// One time bucket of the plotted series.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Ordinal time label, e.g. `"4 seconds"`.
    pub label: String,
    /// Percentage in `0..=100`.
    pub value: f32,
}

impl Sample {
    pub fn new(label: impl Into<String>, value: f32) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Screen-space coordinate relative to the chart origin (top-left corner).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelPoint {
    pub x: f32,
    pub y: f32,
}

impl PixelPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: PixelPoint) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    pub fn lerp(self, other: PixelPoint, t: f32) -> PixelPoint {
        PixelPoint {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 12.0,
            right: 12.0,
            bottom: 36.0,
            left: 48.0,
        }
    }
}

/// Fixed intrinsic size of the chart surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartLayout {
    pub width: f32,
    pub height: f32,
    pub margin: Margin,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 320.0,
            margin: Margin::default(),
        }
    }
}

impl ChartLayout {
    pub fn x_range(&self) -> (f32, f32) {
        (self.margin.left, self.width - self.margin.right)
    }

    /// Pixel range for the value axis, bottom first.
    pub fn y_range(&self) -> (f32, f32) {
        (self.height - self.margin.bottom, self.margin.top)
    }

    pub fn size(&self) -> egui::Vec2 {
        egui::vec2(self.width, self.height)
    }
}

const CPU_USAGE: [f32; 31] = [
    10.0, 15.0, 18.0, 20.0, 25.0, 22.0, 20.0, 24.0, 28.0, 30.0, 34.0, 32.0, 35.0, 40.0, 45.0, 42.0,
    50.0, 55.0, 58.0, 50.0, 43.0, 43.0, 25.0, 27.0, 30.0, 22.0, 28.0, 34.0, 38.0, 32.0, 42.0,
];

/// Mocked CPU usage series, one sample every two seconds over a minute.
pub fn cpu_usage_samples() -> Vec<Sample> {
    CPU_USAGE
        .iter()
        .enumerate()
        .map(|(i, &usage)| Sample::new(format!("{} seconds", i * 2), usage))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_series_is_ordered_and_unique() {
        let samples = cpu_usage_samples();
        assert_eq!(samples.len(), 31);
        assert_eq!(samples[0].label, "0 seconds");
        assert_eq!(samples[30].label, "60 seconds");

        let mut labels: Vec<_> = samples.iter().map(|s| s.label.as_str()).collect();
        labels.dedup();
        assert_eq!(labels.len(), samples.len());
        assert!(samples.iter().all(|s| (0.0..=100.0).contains(&s.value)));
    }

    #[test]
    fn layout_ranges_follow_margins() {
        let layout = ChartLayout::default();
        assert_eq!(layout.x_range(), (48.0, 788.0));
        assert_eq!(layout.y_range(), (284.0, 12.0));
    }
}
