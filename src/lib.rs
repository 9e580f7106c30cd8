pub mod constants;
pub mod weather;
pub mod time;
pub mod wetness;
pub mod settings;
pub mod gpu;
pub mod effects;

pub use effects::{FrameInputs, ShaderKind, WetnessEffects};
pub use gpu::{DirectionalAmbient, GpuError, PerPassBuffer, PerPassGpu, PerPassSink};
pub use settings::{SettingsError, WetnessSettings};
pub use time::{SolarTiming, TimeOfDay};
pub use weather::{
    classify, FogCoverage, FogData, PrecipitationFade, SceneContext, SkySnapshot,
    WeatherClassification, WeatherFlags, WeatherSample,
};
pub use wetness::{compute_wetness, ease, transition_percentage, WetnessRules};
