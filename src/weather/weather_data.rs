/// Weather descriptor snapshots handed over by the host each frame
/// These are plain data - classification lives in `classify`

use serde::{Serialize, Deserialize};

use crate::constants::fog::{NEAR_DISTANCE_THRESHOLD, POWER_THRESHOLD};
use crate::time::SolarTiming;

/// Weather data flags as reported by the host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherFlags {
    pub rainy: bool,
    pub snow: bool,
    pub cloudy: bool,
}

impl WeatherFlags {
    pub fn rainy() -> Self {
        Self { rainy: true, ..Self::default() }
    }

    pub fn snow() -> Self {
        Self { snow: true, ..Self::default() }
    }

    pub fn cloudy() -> Self {
        Self { cloudy: true, ..Self::default() }
    }
}

/// Fog parameters for day and night
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FogData {
    pub day_near: f32,
    pub day_power: f32,
    pub night_near: f32,
    pub night_power: f32,
}

impl FogData {
    /// Thin fog that never qualifies as foggy
    pub fn clear() -> Self {
        Self {
            day_near: 500.0,
            day_power: 1.0,
            night_near: 500.0,
            night_power: 1.0,
        }
    }

    /// Whether the day-side fog qualifies as foggy
    pub fn is_day_foggy(&self) -> bool {
        self.day_near <= NEAR_DISTANCE_THRESHOLD && self.day_power <= POWER_THRESHOLD
    }

    /// Whether the night-side fog qualifies as foggy
    pub fn is_night_foggy(&self) -> bool {
        self.night_near <= NEAR_DISTANCE_THRESHOLD && self.night_power <= POWER_THRESHOLD
    }
}

impl Default for FogData {
    fn default() -> Self {
        Self::clear()
    }
}

/// Precipitation fade timers, in the host's cyclic unit of 256
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PrecipitationFade {
    pub begin_fade_in: f32,
    pub end_fade_out: f32,
}

/// Immutable snapshot of one weather
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    /// Host form id, only used for logging
    pub id: u32,
    pub flags: WeatherFlags,
    pub fog: FogData,
    pub precipitation: PrecipitationFade,
}

impl WeatherSample {
    pub fn new(id: u32, flags: WeatherFlags, fog: FogData, precipitation: PrecipitationFade) -> Self {
        Self { id, flags, fog, precipitation }
    }

    pub fn is_rainy(&self) -> bool {
        self.flags.rainy
    }
}

/// Sky state for one frame: outgoing and incoming weather plus progress
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SkySnapshot {
    pub current: Option<WeatherSample>,
    pub previous: Option<WeatherSample>,
    /// Progress of the transition from `previous` to `current` (0-1)
    pub current_weather_pct: f32,
    /// Climate timing of the current climate, if any
    pub solar: Option<SolarTiming>,
}

impl SkySnapshot {
    /// Steady sky showing a single weather
    pub fn steady(current: WeatherSample) -> Self {
        Self {
            current: Some(current),
            previous: None,
            current_weather_pct: 1.0,
            solar: None,
        }
    }

    /// Sky in the middle of a transition
    pub fn transition(previous: WeatherSample, current: WeatherSample, current_weather_pct: f32) -> Self {
        Self {
            current: Some(current),
            previous: Some(previous),
            current_weather_pct,
            solar: None,
        }
    }

    pub fn with_solar(mut self, solar: SolarTiming) -> Self {
        self.solar = Some(solar);
        self
    }
}

/// Where the player is, as far as wetness cares
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SceneContext {
    pub is_interior: bool,
}

impl SceneContext {
    pub fn exterior() -> Self {
        Self { is_interior: false }
    }

    pub fn interior() -> Self {
        Self { is_interior: true }
    }
}
