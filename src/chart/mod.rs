pub mod animation;
pub mod config;
pub mod curve;
pub mod frame_loop;
pub mod nearest;
pub mod pointer;
pub mod sample;
pub mod scale;
pub mod walker;

pub use animation::{AnimationConfig, AnimationDriver, AnimationFrame, PulseConfig, SpringConfig};
pub use config::ChartConfig;
pub use curve::{catmull_rom, CurvePath};
pub use frame_loop::{FrameHandle, FrameLoop};
pub use nearest::nearest_index;
pub use pointer::{PointerChange, PointerEvent, PointerTracker};
pub use sample::{cpu_usage_samples, ChartLayout, Margin, PixelPoint, Sample};
pub use scale::{LinearScale, PointScale};
pub use walker::{walk, Trace, TraceConfig};
