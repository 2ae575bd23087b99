pub mod glow_chart;
pub mod settings;

pub use glow_chart::GlowChart;
pub use settings::{show_settings_window, Settings};
