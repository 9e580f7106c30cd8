//! User-tunable wetness settings
//!
//! Handed to the shader unmodified; only `enable_wetness_effects` affects the
//! wetness computation itself.

pub mod error;
pub mod persistence;

pub use error::{SettingsError, SettingsResult};
pub use persistence::{load_from_path, save_to_path};

use serde::{Serialize, Deserialize};

/// Which field a slider range applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingField {
    MaxRainWetness,
    MaxShoreWetness,
    MaxDarkness,
    MaxOcclusion,
    MinRoughness,
    ShoreRange,
    PuddleMinWetness,
    PuddleRadius,
    PuddleMaxAngle,
    PuddleFlatness,
}

/// Slider bounds the settings panel exposes for a field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettingRange {
    pub field: SettingField,
    pub label: &'static str,
    pub min: f32,
    pub max: f32,
}

pub static SETTING_RANGES: [SettingRange; 10] = [
    SettingRange { field: SettingField::MaxRainWetness, label: "Max Rain Wetness", min: 0.0, max: 1.0 },
    SettingRange { field: SettingField::MaxShoreWetness, label: "Max Shore Wetness", min: 0.0, max: 1.0 },
    SettingRange { field: SettingField::MaxDarkness, label: "Max Darkness", min: 1.0, max: 2.0 },
    SettingRange { field: SettingField::MaxOcclusion, label: "Max Occlusion", min: 0.0, max: 1.0 },
    SettingRange { field: SettingField::MinRoughness, label: "Min Roughness", min: 0.0, max: 1.0 },
    SettingRange { field: SettingField::ShoreRange, label: "Shore Range", min: 1.0, max: 64.0 },
    SettingRange { field: SettingField::PuddleMinWetness, label: "Puddle Min Wetness", min: 0.0, max: 1.0 },
    SettingRange { field: SettingField::PuddleRadius, label: "Puddle Radius", min: 0.0, max: 3.0 },
    SettingRange { field: SettingField::PuddleMaxAngle, label: "Puddle Max Angle", min: 0.0, max: 1.0 },
    SettingRange { field: SettingField::PuddleFlatness, label: "Puddle Flatness", min: 0.0, max: 1.0 },
];

/// Look up the slider range of a field
pub fn setting_range(field: SettingField) -> &'static SettingRange {
    // SETTING_RANGES holds exactly one entry per field, in declaration order
    &SETTING_RANGES[field as usize]
}

/// Wetness settings as stored in the host's JSON config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct WetnessSettings {
    pub enable_wetness_effects: bool,
    pub max_rain_wetness: f32,
    pub max_shore_wetness: f32,
    pub max_darkness: f32,
    pub max_occlusion: f32,
    pub min_roughness: f32,
    pub shore_range: u32,
    pub puddle_min_wetness: f32,
    pub puddle_radius: f32,
    pub puddle_max_angle: f32,
    pub puddle_flatness: f32,
}

impl Default for WetnessSettings {
    fn default() -> Self {
        Self {
            enable_wetness_effects: true,
            max_rain_wetness: 1.0,
            max_shore_wetness: 0.5,
            max_darkness: 1.5,
            max_occlusion: 0.3,
            min_roughness: 0.1,
            shore_range: 32,
            puddle_min_wetness: 0.75,
            puddle_radius: 1.0,
            puddle_max_angle: 0.95,
            puddle_flatness: 0.7,
        }
    }
}

impl WetnessSettings {
    /// Copy with every field clamped into its slider range
    pub fn clamped(&self) -> Self {
        let clamp = |value: f32, field: SettingField| {
            let range = setting_range(field);
            value.clamp(range.min, range.max)
        };
        let shore = setting_range(SettingField::ShoreRange);

        let clamped = Self {
            enable_wetness_effects: self.enable_wetness_effects,
            max_rain_wetness: clamp(self.max_rain_wetness, SettingField::MaxRainWetness),
            max_shore_wetness: clamp(self.max_shore_wetness, SettingField::MaxShoreWetness),
            max_darkness: clamp(self.max_darkness, SettingField::MaxDarkness),
            max_occlusion: clamp(self.max_occlusion, SettingField::MaxOcclusion),
            min_roughness: clamp(self.min_roughness, SettingField::MinRoughness),
            shore_range: self.shore_range.clamp(shore.min as u32, shore.max as u32),
            puddle_min_wetness: clamp(self.puddle_min_wetness, SettingField::PuddleMinWetness),
            puddle_radius: clamp(self.puddle_radius, SettingField::PuddleRadius),
            puddle_max_angle: clamp(self.puddle_max_angle, SettingField::PuddleMaxAngle),
            puddle_flatness: clamp(self.puddle_flatness, SettingField::PuddleFlatness),
        };

        if clamped != *self {
            log::warn!("[WetnessSettings] Clamped out-of-range settings to {:?}", clamped);
        }
        clamped
    }

    /// Value of a ranged field, as shown on its slider
    pub fn value(&self, field: SettingField) -> f32 {
        match field {
            SettingField::MaxRainWetness => self.max_rain_wetness,
            SettingField::MaxShoreWetness => self.max_shore_wetness,
            SettingField::MaxDarkness => self.max_darkness,
            SettingField::MaxOcclusion => self.max_occlusion,
            SettingField::MinRoughness => self.min_roughness,
            SettingField::ShoreRange => self.shore_range as f32,
            SettingField::PuddleMinWetness => self.puddle_min_wetness,
            SettingField::PuddleRadius => self.puddle_radius,
            SettingField::PuddleMaxAngle => self.puddle_max_angle,
            SettingField::PuddleFlatness => self.puddle_flatness,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_cover_every_field_in_order() {
        let fields = [
            SettingField::MaxRainWetness,
            SettingField::MaxShoreWetness,
            SettingField::MaxDarkness,
            SettingField::MaxOcclusion,
            SettingField::MinRoughness,
            SettingField::ShoreRange,
            SettingField::PuddleMinWetness,
            SettingField::PuddleRadius,
            SettingField::PuddleMaxAngle,
            SettingField::PuddleFlatness,
        ];
        for field in fields {
            let range = setting_range(field);
            assert_eq!(range.field, field);
            assert!(range.min < range.max);
        }
    }

    #[test]
    fn test_defaults_inside_ranges() {
        let settings = WetnessSettings::default();
        assert_eq!(settings.clamped(), settings);
        for range in &SETTING_RANGES {
            let value = settings.value(range.field);
            assert!(value >= range.min && value <= range.max, "{} out of range", range.label);
        }
    }

    #[test]
    fn test_clamped() {
        let settings = WetnessSettings {
            max_rain_wetness: 4.0,
            max_darkness: 0.2,
            shore_range: 0,
            puddle_radius: -1.0,
            ..WetnessSettings::default()
        };
        let clamped = settings.clamped();
        assert_eq!(clamped.max_rain_wetness, 1.0);
        assert_eq!(clamped.max_darkness, 1.0);
        assert_eq!(clamped.shore_range, 1);
        assert_eq!(clamped.puddle_radius, 0.0);

        let wide = WetnessSettings { shore_range: 1000, ..WetnessSettings::default() };
        assert_eq!(wide.clamped().shore_range, 64);
    }
}
