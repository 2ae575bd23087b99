use crate::chart::ChartConfig;

#[derive(serde::Deserialize, serde::Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub scale: f32,
    pub font_size: f32,
    pub chart: ChartConfig,
    #[serde(skip)]
    show_window: bool,
    /// Marker path being edited in the settings window.
    #[serde(skip)]
    pub(super) marker_input: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scale: 1.0,
            font_size: 15.0,
            chart: ChartConfig::default(),
            show_window: false,
            marker_input: String::new(),
        }
    }
}

impl Settings {
    pub fn show(&mut self) {
        self.show_window = true;
        self.sync_marker_input();
    }

    /// Applies the edited marker path; blank clears it.
    pub(super) fn commit_marker_input(&mut self) {
        let path = self.marker_input.trim();
        self.chart.marker_path = (!path.is_empty()).then(|| path.into());
    }

    pub fn is_visible(&self) -> bool {
        self.show_window
    }

    pub fn hide(&mut self) {
        self.show_window = false;
    }

    /// Restores chart tuning to the defaults, keeping UI scale and fonts.
    pub fn reset_chart(&mut self) {
        self.chart = ChartConfig::default();
        self.sync_marker_input();
    }

    fn sync_marker_input(&mut self) {
        self.marker_input = self
            .chart
            .marker_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
    }

    pub fn apply(&self, ctx: &egui::Context) {
        ctx.set_pixels_per_point(self.scale);

        let mut style = (*ctx.style()).clone();
        style.text_styles = [
            (
                egui::TextStyle::Heading,
                egui::FontId::new(self.font_size + 4.0, egui::FontFamily::Proportional),
            ),
            (
                egui::TextStyle::Body,
                egui::FontId::new(self.font_size, egui::FontFamily::Proportional),
            ),
            (
                egui::TextStyle::Monospace,
                egui::FontId::new(self.font_size, egui::FontFamily::Monospace),
            ),
            (
                egui::TextStyle::Button,
                egui::FontId::new(self.font_size, egui::FontFamily::Proportional),
            ),
            (
                egui::TextStyle::Small,
                egui::FontId::new(self.font_size - 2.0, egui::FontFamily::Proportional),
            ),
        ]
        .into();
        ctx.set_style(style);
    }
}
