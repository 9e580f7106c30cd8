//! Per-pass wetness record read by the lighting shader
//!
//! Layout matches the shader's structured buffer element at slot 22.

use bytemuck::{Pod, Zeroable};
use glam::{Mat3, Vec3};

use crate::settings::WetnessSettings;

/// Settings block as the shader sees it
/// Total size: 48 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct WetnessSettingsGpu {
    /// 1 = enabled, 0 = disabled
    pub enable_wetness_effects: u32,
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
    pub _padding: u32,
}

impl From<&WetnessSettings> for WetnessSettingsGpu {
    fn from(settings: &WetnessSettings) -> Self {
        Self {
            enable_wetness_effects: settings.enable_wetness_effects as u32,
            max_rain_wetness: settings.max_rain_wetness,
            max_shore_wetness: settings.max_shore_wetness,
            max_darkness: settings.max_darkness,
            max_occlusion: settings.max_occlusion,
            min_roughness: settings.min_roughness,
            shore_range: settings.shore_range,
            puddle_min_wetness: settings.puddle_min_wetness,
            puddle_radius: settings.puddle_radius,
            puddle_max_angle: settings.puddle_max_angle,
            puddle_flatness: settings.puddle_flatness,
            _padding: 0,
        }
    }
}

/// Directional ambient lighting transform in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalAmbient {
    pub rotation: Mat3,
    pub translation: Vec3,
}

impl DirectionalAmbient {
    pub fn new(rotation: Mat3, translation: Vec3) -> Self {
        Self { rotation, translation }
    }

    /// Row-major 3x4 matrix: rotation rows as given, translation in w
    ///
    /// The matrix is copied without any normalization or scale removal.
    pub fn to_rows(&self) -> [[f32; 4]; 3] {
        let mut rows = [[0.0; 4]; 3];
        for (i, row) in rows.iter_mut().enumerate() {
            let r = self.rotation.row(i);
            *row = [r.x, r.y, r.z, self.translation[i]];
        }
        rows
    }
}

impl Default for DirectionalAmbient {
    fn default() -> Self {
        Self::new(Mat3::IDENTITY, Vec3::ZERO)
    }
}

/// Per-pass record uploaded before each lighting draw
/// Total size: 112 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct PerPassGpu {
    /// Blended wetness for this frame
    pub wetness: f32,
    pub _padding: [f32; 3],

    /// Directional ambient transform, see [`DirectionalAmbient::to_rows`]
    pub directional_ambient_ws: [[f32; 4]; 3],

    pub settings: WetnessSettingsGpu,
}

impl PerPassGpu {
    pub fn new(wetness: f32, ambient: &DirectionalAmbient, settings: &WetnessSettings) -> Self {
        Self {
            wetness,
            _padding: [0.0; 3],
            directional_ambient_ws: ambient.to_rows(),
            settings: WetnessSettingsGpu::from(settings),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
