// Wetness Effects Constants - SINGLE SOURCE OF TRUTH
//
// This file contains ALL constants used by the wetness model.
// The GPU record layout and the shader both depend on these values.
//
// CRITICAL: Do NOT define constants anywhere else in the codebase!

/// Base wetness levels per weather category
pub mod wetness {
    pub const RAIN_WETNESS: f32 = 1.0;
    /// Snow counts as dry under the day/night rules
    pub const SNOW_WETNESS: f32 = 0.0;
    /// Snow counts as half wet under the classic rules
    pub const CLASSIC_SNOW_WETNESS: f32 = 0.5;
    pub const FOG_WETNESS: f32 = 0.5;
    pub const DRY_WETNESS: f32 = 0.0;
}

/// Fog thresholds used to decide whether a weather is foggy
pub mod fog {
    /// Fog near distance at or below this counts as fog
    pub const NEAR_DISTANCE_THRESHOLD: f32 = 0.0;
    /// Fog power at or below this counts as fog
    pub const POWER_THRESHOLD: f32 = 0.5;
}

/// Weather transition timing
pub mod transition {
    /// Fade timers are expressed in a cyclic unit of 256
    pub const DENOMINATOR: f32 = 256.0;
    /// Lower bound of the start percentage, keeps the ramp non-degenerate
    pub const MIN_START_PERCENTAGE: f32 = 0.05;
    /// Fully transitioned (show current weather only)
    pub const DEFAULT_PERCENTAGE: f32 = 1.0;
    /// Easing exponent for the day/night rules
    pub const DAY_NIGHT_CURVE_EXPONENT: f32 = 2.0;
    /// Easing exponent for the classic rules
    pub const CLASSIC_CURVE_EXPONENT: f32 = 3.0;
}

/// Day/night factor values (0 = day, 1 = night)
pub mod day_night {
    pub const DAY: f32 = 0.0;
    pub const NIGHT: f32 = 1.0;
    pub const SECONDS_PER_HOUR: i32 = 3600;
    pub const SECONDS_PER_MINUTE: i32 = 60;
    pub const SECONDS_PER_DAY: i32 = 86400;
}

/// GPU record layout - must match the lighting shader
pub mod buffer_layouts {
    /// Shader resource slot the per-pass record is bound to
    pub const PER_PASS_SLOT: u32 = 22;
    /// Size of the packed settings block in bytes
    pub const SETTINGS_GPU_SIZE: u64 = 48;
    /// Size of the per-pass record in bytes (16-byte aligned)
    pub const PER_PASS_SIZE: u64 = 112;
}

/// Settings persistence
pub mod settings {
    /// Key the settings block is stored under in the host's JSON config
    pub const SETTINGS_KEY: &str = "Wetness Effects";
}
