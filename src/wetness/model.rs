use crate::constants::transition::DEFAULT_PERCENTAGE;
use crate::constants::wetness::DRY_WETNESS;
use crate::weather::{SceneContext, SkySnapshot};
use crate::wetness::rules::{lerp, WetnessRules};
use crate::wetness::transition::{ease, transition_percentage};

/// Wetness for the current frame
///
/// Pure function of the snapshots passed in. Interiors, a disabled feature,
/// a missing scene, sky or current weather all yield dry.
pub fn compute_wetness(
    rules: &WetnessRules,
    enabled: bool,
    scene: Option<&SceneContext>,
    sky: Option<&SkySnapshot>,
) -> f32 {
    if !enabled {
        return DRY_WETNESS;
    }
    let Some(scene) = scene else {
        return DRY_WETNESS;
    };
    if scene.is_interior {
        return DRY_WETNESS;
    }
    let Some(sky) = sky else {
        return DRY_WETNESS;
    };
    let Some(current) = sky.current.as_ref() else {
        return DRY_WETNESS;
    };

    let solar = sky.solar.as_ref();
    let wetness_current = rules.weather_wetness(current, solar);
    let mut wetness_previous = DRY_WETNESS;
    let mut transition = DEFAULT_PERCENTAGE;

    if let Some(previous) = sky.previous.as_ref() {
        wetness_previous = rules.weather_wetness(previous, solar);

        // A rainy previous weather waits for its precipitation to end
        transition = if rules.rainy_previous_uses_end_fade && previous.is_rainy() {
            transition_percentage(
                Some(previous),
                previous.precipitation.end_fade_out,
                sky.current_weather_pct,
            )
        } else {
            transition_percentage(
                Some(current),
                current.precipitation.begin_fade_in,
                sky.current_weather_pct,
            )
        };
        transition = ease(transition, rules.ease_exponent);
    }

    let wetness = lerp(wetness_previous, wetness_current, transition);
    if rules.clamp_result {
        wetness.clamp(0.0, 1.0)
    } else {
        wetness
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::{FogData, PrecipitationFade, WeatherFlags, WeatherSample};

    fn rain(begin_fade_in: f32, end_fade_out: f32) -> WeatherSample {
        WeatherSample::new(
            1,
            WeatherFlags::rainy(),
            FogData::clear(),
            PrecipitationFade { begin_fade_in, end_fade_out },
        )
    }

    fn clear(begin_fade_in: f32) -> WeatherSample {
        WeatherSample::new(
            2,
            WeatherFlags::default(),
            FogData::clear(),
            PrecipitationFade { begin_fade_in, end_fade_out: 0.0 },
        )
    }

    fn snow() -> WeatherSample {
        WeatherSample::new(3, WeatherFlags::snow(), FogData::clear(), PrecipitationFade::default())
    }

    #[test]
    fn test_steady_rain_is_fully_wet() {
        let scene = SceneContext::exterior();
        for fade in [-100.0, 0.0, 10.0, 200.0] {
            let sky = SkySnapshot::steady(rain(fade, fade));
            let wetness = compute_wetness(&WetnessRules::day_night(), true, Some(&scene), Some(&sky));
            assert_eq!(wetness, 1.0);
        }
    }

    #[test]
    fn test_interior_is_dry() {
        let scene = SceneContext::interior();
        let sky = SkySnapshot::transition(clear(64.0), rain(64.0, 64.0), 0.7);
        for rules in [WetnessRules::day_night(), WetnessRules::classic()] {
            assert_eq!(compute_wetness(&rules, true, Some(&scene), Some(&sky)), 0.0);
        }
    }

    #[test]
    fn test_missing_inputs_are_dry() {
        let rules = WetnessRules::day_night();
        let scene = SceneContext::exterior();
        let sky = SkySnapshot::steady(rain(0.0, 0.0));

        assert_eq!(compute_wetness(&rules, false, Some(&scene), Some(&sky)), 0.0);
        assert_eq!(compute_wetness(&rules, true, None, Some(&sky)), 0.0);
        assert_eq!(compute_wetness(&rules, true, Some(&scene), None), 0.0);

        let empty = SkySnapshot { current: None, ..sky };
        assert_eq!(compute_wetness(&rules, true, Some(&scene), Some(&empty)), 0.0);
    }

    #[test]
    fn test_clear_to_rain_transition() {
        let rules = WetnessRules::day_night();
        let scene = SceneContext::exterior();
        // begin fade 128 -> transition starts at 50%
        let previous = clear(0.0);
        let current = rain(128.0, 0.0);

        let before = SkySnapshot::transition(previous, current, 0.4);
        assert_eq!(compute_wetness(&rules, true, Some(&scene), Some(&before)), 0.0);

        // (0.75 - 0.5) / 0.5 = 0.5, eased to 0.25
        let halfway = SkySnapshot::transition(previous, current, 0.75);
        let wetness = compute_wetness(&rules, true, Some(&scene), Some(&halfway));
        assert!((wetness - 0.25).abs() < 1e-6);

        let done = SkySnapshot::transition(previous, current, 1.0);
        assert_eq!(compute_wetness(&rules, true, Some(&scene), Some(&done)), 1.0);
    }

    #[test]
    fn test_rain_to_clear_uses_end_fade() {
        let scene = SceneContext::exterior();
        // Rain ends at fade 64 -> start at 75%; clear begin fade would start at 5%
        let previous = rain(0.0, 64.0);
        let current = clear(256.0);
        let sky = SkySnapshot::transition(previous, current, 0.5);

        // Day/night rules still hold rain: transition percentage is 0
        let day_night = compute_wetness(&WetnessRules::day_night(), true, Some(&scene), Some(&sky));
        assert_eq!(day_night, 1.0);

        // Classic rules follow the clear weather's fade in: (0.5 - 0.05) / 0.95, cubed
        let classic = compute_wetness(&WetnessRules::classic(), true, Some(&scene), Some(&sky));
        let pct: f32 = (0.5 - 0.05) / 0.95;
        assert!((classic - (1.0 - pct.powi(3))).abs() < 1e-5);
    }

    #[test]
    fn test_snow_transition_per_variant() {
        let scene = SceneContext::exterior();
        let sky = SkySnapshot::transition(clear(256.0), snow(), 1.0);
        assert_eq!(compute_wetness(&WetnessRules::day_night(), true, Some(&scene), Some(&sky)), 0.0);
        assert_eq!(compute_wetness(&WetnessRules::classic(), true, Some(&scene), Some(&sky)), 0.5);
    }

    #[test]
    fn test_clamp_policy() {
        let scene = SceneContext::exterior();
        let sky = SkySnapshot::transition(clear(256.0), rain(256.0, 0.0), 1.0);

        // Out-of-range snow wetness only survives when the result is not clamped
        let mut loose = WetnessRules::day_night();
        loose.snow_wetness = 1.5;
        let mut strict = WetnessRules::classic();
        strict.snow_wetness = 1.5;

        let snowy = SkySnapshot::steady(snow());
        assert_eq!(compute_wetness(&loose, true, Some(&scene), Some(&snowy)), 1.5);
        assert_eq!(compute_wetness(&strict, true, Some(&scene), Some(&snowy)), 1.0);
        assert_eq!(compute_wetness(&strict, true, Some(&scene), Some(&sky)), 1.0);
    }
}
