//! GPU side of the wetness pass: record layout and upload

pub mod buffer_layouts;
pub mod buffer_manager;

pub use buffer_layouts::{DirectionalAmbient, PerPassGpu, WetnessSettingsGpu};
pub use buffer_manager::{GpuError, PerPassBuffer, PerPassSink, RecordingSink};
