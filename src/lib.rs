#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod chart;
pub mod components;
pub use app::GlowChartApp;
