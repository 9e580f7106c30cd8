/// Weather module - host weather snapshots and their classification
/// Wetness values per category are chosen by `wetness::WetnessRules`

pub mod weather_data;
pub mod classify;

// Re-export commonly used types
pub use weather_data::{
    WeatherFlags, FogData, PrecipitationFade, WeatherSample, SkySnapshot, SceneContext,
};
pub use classify::{classify, WeatherClassification, FogCoverage};
