pub mod time_of_day;
pub mod solar_timing;

pub use time_of_day::{TimeOfDay, game_hour_to_seconds};
pub use solar_timing::SolarTiming;
