//! Tests for GPU buffer layouts

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::settings::WetnessSettings;
    use glam::{Mat3, Vec3};
    use std::mem;

    #[test]
    fn test_buffer_sizes() {
        assert_eq!(mem::size_of::<WetnessSettingsGpu>() as u64, SETTINGS_GPU_SIZE);
        assert_eq!(mem::size_of::<PerPassGpu>() as u64, PER_PASS_SIZE);
        assert_eq!(PER_PASS_SIZE % 16, 0);
        assert_eq!(mem::align_of::<PerPassGpu>(), 4);
    }

    #[test]
    fn test_field_offsets() {
        let record = PerPassGpu::default();
        let base = &record as *const PerPassGpu as usize;
        assert_eq!(&record.wetness as *const f32 as usize - base, 0);
        assert_eq!(&record.directional_ambient_ws as *const [[f32; 4]; 3] as usize - base, 16);
        assert_eq!(&record.settings as *const WetnessSettingsGpu as usize - base, 64);
    }

    #[test]
    fn test_settings_packing() {
        let settings = WetnessSettings {
            enable_wetness_effects: false,
            shore_range: 7,
            ..WetnessSettings::default()
        };
        let packed = WetnessSettingsGpu::from(&settings);
        assert_eq!(packed.enable_wetness_effects, 0);
        assert_eq!(packed.shore_range, 7);
        assert_eq!(packed.max_darkness, settings.max_darkness);
        assert_eq!(packed._padding, 0);

        let enabled = WetnessSettingsGpu::from(&WetnessSettings::default());
        assert_eq!(enabled.enable_wetness_effects, 1);
    }

    #[test]
    fn test_directional_ambient_rows() {
        let identity = DirectionalAmbient::new(Mat3::IDENTITY, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(
            identity.to_rows(),
            [[1.0, 0.0, 0.0, 1.0], [0.0, 1.0, 0.0, 2.0], [0.0, 0.0, 1.0, 3.0]]
        );

        // Copied as given, scale included
        let scaled = DirectionalAmbient::new(Mat3::from_diagonal(Vec3::new(2.0, 4.0, 0.5)), Vec3::ZERO);
        assert_eq!(
            scaled.to_rows(),
            [[2.0, 0.0, 0.0, 0.0], [0.0, 4.0, 0.0, 0.0], [0.0, 0.0, 0.5, 0.0]]
        );
    }

    #[test]
    fn test_directional_ambient_rows_are_matrix_rows() {
        // x column (0, 0, 2): lands in the first entry of each row
        let rotation = Mat3::from_cols(
            Vec3::new(0.0, 0.0, 2.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
        );
        let rows = DirectionalAmbient::new(rotation, Vec3::new(4.0, 5.0, 6.0)).to_rows();
        assert_eq!(rows[0], [0.0, 0.0, 3.0, 4.0]);
        assert_eq!(rows[1], [0.0, 1.0, 0.0, 5.0]);
        assert_eq!(rows[2], [2.0, 0.0, 0.0, 6.0]);
    }

    #[test]
    fn test_record_bytes() {
        let record = PerPassGpu::new(0.5, &DirectionalAmbient::default(), &WetnessSettings::default());
        let bytes = record.as_bytes();
        assert_eq!(bytes.len() as u64, PER_PASS_SIZE);
        assert_eq!(&bytes[0..4], &0.5f32.to_ne_bytes());
    }
}
