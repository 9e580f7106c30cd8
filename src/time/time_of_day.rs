use serde::{Serialize, Deserialize};

use crate::constants::day_night::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

/// Time of day in 24-hour format with whole seconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeOfDay {
    /// Hours (0-23)
    pub hours: u8,
    /// Minutes (0-59)
    pub minutes: u8,
    /// Seconds (0-59)
    pub seconds: u8,
}

impl TimeOfDay {
    /// Create a new time of day
    pub fn new(hours: u8, minutes: u8, seconds: u8) -> Self {
        Self {
            hours: hours % 24,
            minutes: minutes % 60,
            seconds: seconds % 60,
        }
    }

    /// Create from total seconds since midnight
    pub fn from_seconds(total_seconds: i32) -> Self {
        let normalized = total_seconds.rem_euclid(SECONDS_PER_DAY);

        let hours = (normalized / SECONDS_PER_HOUR) as u8;
        let minutes = ((normalized % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE) as u8;
        let seconds = (normalized % SECONDS_PER_MINUTE) as u8;

        Self::new(hours, minutes, seconds)
    }

    /// Convert to total seconds since midnight
    pub fn to_seconds(&self) -> i32 {
        self.hours as i32 * SECONDS_PER_HOUR
            + self.minutes as i32 * SECONDS_PER_MINUTE
            + self.seconds as i32
    }

    /// Format as HH:MM:SS
    pub fn format(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// Convert a fractional game hour (e.g. 6.5 = 06:30) to whole seconds since midnight
pub fn game_hour_to_seconds(game_hour: f32) -> i32 {
    (game_hour * SECONDS_PER_HOUR as f32) as i32
}
