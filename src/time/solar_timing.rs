use serde::{Serialize, Deserialize};

use crate::constants::day_night::{DAY, NIGHT};
use crate::time::time_of_day::{game_hour_to_seconds, TimeOfDay};

/// Sunrise/sunset windows of the current climate plus the current game hour
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarTiming {
    pub sunrise_begin: TimeOfDay,
    pub sunrise_end: TimeOfDay,
    pub sunset_begin: TimeOfDay,
    pub sunset_end: TimeOfDay,
    /// Current game hour (0.0 - 24.0)
    pub game_hour: f32,
}

impl SolarTiming {
    pub fn new(
        sunrise_begin: TimeOfDay,
        sunrise_end: TimeOfDay,
        sunset_begin: TimeOfDay,
        sunset_end: TimeOfDay,
        game_hour: f32,
    ) -> Self {
        Self {
            sunrise_begin,
            sunrise_end,
            sunset_begin,
            sunset_end,
            game_hour,
        }
    }

    /// Same climate windows at another hour
    pub fn at_hour(mut self, game_hour: f32) -> Self {
        self.game_hour = game_hour;
        self
    }

    /// Windows are ordered sunrise before sunset, each with positive length
    pub fn is_well_ordered(&self) -> bool {
        let sunrise_begin = self.sunrise_begin.to_seconds();
        let sunrise_end = self.sunrise_end.to_seconds();
        let sunset_begin = self.sunset_begin.to_seconds();
        let sunset_end = self.sunset_end.to_seconds();

        sunset_end > sunset_begin
            && sunset_begin >= sunrise_end
            && sunrise_end > sunrise_begin
            && sunrise_begin >= 0
    }

    /// Day/night transition factor: 0 = full day, 1 = full night
    ///
    /// Ramps linearly through the sunrise and sunset windows. Badly ordered
    /// windows leave the factor at night.
    pub fn day_night_factor(&self) -> f32 {
        let mut factor = NIGHT;
        if !self.is_well_ordered() {
            log::debug!("Solar timing out of order, treating as night: {:?}", self);
            return factor;
        }

        let sunrise_begin = self.sunrise_begin.to_seconds();
        let sunrise_end = self.sunrise_end.to_seconds();
        let sunset_begin = self.sunset_begin.to_seconds();
        let sunset_end = self.sunset_end.to_seconds();
        let time = game_hour_to_seconds(self.game_hour);

        if time < sunrise_begin || time > sunset_end {
            factor = NIGHT;
            log::debug!("FOG Night");
        } else if time <= sunrise_end {
            // Sunrise, night 1 -> day 0
            factor = 1.0 - (time - sunrise_begin) as f32 / (sunrise_end - sunrise_begin) as f32;
            log::debug!("FOG Sunrise");
        } else if time < sunset_begin {
            factor = DAY;
            log::debug!("FOG Day");
        } else if time <= sunset_end {
            // Sunset, day 0 -> night 1
            factor = (time - sunset_begin) as f32 / (sunset_end - sunset_begin) as f32;
            log::debug!("FOG Sunset");
        } else {
            log::info!("Unreachable time of day {} for solar timing {:?}", time, self);
        }

        factor
    }
}

impl Default for SolarTiming {
    /// 06:00-07:00 sunrise, 18:00-19:00 sunset, at noon
    fn default() -> Self {
        Self::new(
            TimeOfDay::new(6, 0, 0),
            TimeOfDay::new(7, 0, 0),
            TimeOfDay::new(18, 0, 0),
            TimeOfDay::new(19, 0, 0),
            12.0,
        )
    }
}
