use crate::constants::transition::{CLASSIC_CURVE_EXPONENT, DAY_NIGHT_CURVE_EXPONENT};
use crate::constants::wetness::{
    CLASSIC_SNOW_WETNESS, DRY_WETNESS, FOG_WETNESS, RAIN_WETNESS, SNOW_WETNESS,
};
use crate::constants::day_night::NIGHT;
use crate::time::SolarTiming;
use crate::weather::{classify, FogCoverage, WeatherClassification, WeatherSample};

/// Rule set selecting between the two wetness behaviours
///
/// `day_night()` understands fog and eases quadratically, `classic()` ignores
/// fog, treats snow as half wet, eases cubically and clamps the blend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WetnessRules {
    /// Classify fog and interpolate day/night fog wetness
    pub fog_interpolation: bool,
    /// Exponent of the transition easing curve
    pub ease_exponent: f32,
    /// Wetness of a snowy weather
    pub snow_wetness: f32,
    /// Clamp the blended wetness to [0, 1]
    pub clamp_result: bool,
    /// When the outgoing weather was rainy, drive the transition by its fade-out timer
    pub rainy_previous_uses_end_fade: bool,
}

impl WetnessRules {
    pub fn day_night() -> Self {
        Self {
            fog_interpolation: true,
            ease_exponent: DAY_NIGHT_CURVE_EXPONENT,
            snow_wetness: SNOW_WETNESS,
            clamp_result: false,
            rainy_previous_uses_end_fade: true,
        }
    }

    pub fn classic() -> Self {
        Self {
            fog_interpolation: false,
            ease_exponent: CLASSIC_CURVE_EXPONENT,
            snow_wetness: CLASSIC_SNOW_WETNESS,
            clamp_result: true,
            rainy_previous_uses_end_fade: false,
        }
    }

    /// Base wetness of a single weather
    pub fn weather_wetness(&self, weather: &WeatherSample, solar: Option<&SolarTiming>) -> f32 {
        let classification = classify(weather);
        let fog = &weather.fog;

        let (day_wetness, night_wetness, wetness, transition) = match classification {
            WeatherClassification::Rainy => (RAIN_WETNESS, RAIN_WETNESS, RAIN_WETNESS, None),
            WeatherClassification::Snowy => {
                (self.snow_wetness, self.snow_wetness, self.snow_wetness, None)
            }
            WeatherClassification::Foggy(_) if !self.fog_interpolation => {
                (DRY_WETNESS, DRY_WETNESS, DRY_WETNESS, None)
            }
            WeatherClassification::Foggy(FogCoverage::Both) => {
                (FOG_WETNESS, FOG_WETNESS, FOG_WETNESS, None)
            }
            WeatherClassification::Foggy(coverage) => {
                let day_wetness = if coverage == FogCoverage::Day { FOG_WETNESS } else { DRY_WETNESS };
                let night_wetness = if coverage == FogCoverage::Night { FOG_WETNESS } else { DRY_WETNESS };
                let factor = solar.map(SolarTiming::day_night_factor).unwrap_or(NIGHT);
                (day_wetness, night_wetness, lerp(day_wetness, night_wetness, factor), Some(factor))
            }
            WeatherClassification::Cloudy | WeatherClassification::Clear => {
                (DRY_WETNESS, DRY_WETNESS, DRY_WETNESS, None)
            }
        };

        log::debug!(
            "{}: Weather: {}, Fog Day Near {}, Fog Day Power {}, Fog Night Near {}, Fog Night Power {}, Day wetness {}, Night wetness {}, Wetness {}, DayNightTransition {}",
            self.log_label(classification, weather),
            weather.id,
            fog.day_near,
            fog.day_power,
            fog.night_near,
            fog.night_power,
            day_wetness,
            night_wetness,
            wetness,
            transition.map_or_else(|| "n/a".to_string(), |t| t.to_string()),
        );

        wetness
    }

    /// Label of the branch `weather_wetness` takes for a weather
    ///
    /// Without fog interpolation a foggy weather falls through to the cloudy
    /// or clear branch.
    pub fn log_label(
        &self,
        classification: WeatherClassification,
        weather: &WeatherSample,
    ) -> &'static str {
        match classification {
            WeatherClassification::Foggy(_) if !self.fog_interpolation => {
                if weather.flags.cloudy {
                    WeatherClassification::Cloudy.label()
                } else {
                    WeatherClassification::Clear.label()
                }
            }
            other => other.label(),
        }
    }
}

impl Default for WetnessRules {
    fn default() -> Self {
        Self::day_night()
    }
}

/// Linear interpolation, exact at both ends
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    if t == 1.0 {
        b
    } else {
        a + (b - a) * t
    }
}
