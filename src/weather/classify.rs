use serde::{Serialize, Deserialize};

use super::WeatherSample;

/// Which side of the day a fog applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FogCoverage {
    Day,
    Night,
    Both,
}

/// Weather category, first match wins: Rainy > Snowy > Foggy > Cloudy > Clear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherClassification {
    Rainy,
    Snowy,
    Foggy(FogCoverage),
    Cloudy,
    Clear,
}

impl WeatherClassification {
    /// Short label used in log output
    pub fn label(&self) -> &'static str {
        match self {
            WeatherClassification::Rainy => "RAIN",
            WeatherClassification::Snowy => "SNOW",
            WeatherClassification::Foggy(FogCoverage::Both) => "FOG(both)",
            WeatherClassification::Foggy(_) => "FOG(mixed)",
            WeatherClassification::Cloudy => "CLOUDY",
            WeatherClassification::Clear => "CLEAR",
        }
    }
}

/// Classify a weather by its flags and fog parameters
pub fn classify(weather: &WeatherSample) -> WeatherClassification {
    if weather.flags.rainy {
        return WeatherClassification::Rainy;
    }
    if weather.flags.snow {
        return WeatherClassification::Snowy;
    }

    match (weather.fog.is_day_foggy(), weather.fog.is_night_foggy()) {
        (true, true) => return WeatherClassification::Foggy(FogCoverage::Both),
        (true, false) => return WeatherClassification::Foggy(FogCoverage::Day),
        (false, true) => return WeatherClassification::Foggy(FogCoverage::Night),
        (false, false) => {}
    }

    if weather.flags.cloudy {
        WeatherClassification::Cloudy
    } else {
        WeatherClassification::Clear
    }
}
