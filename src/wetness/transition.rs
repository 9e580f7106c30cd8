//! Weather transition progress and the easing curve applied to it

use crate::constants::transition::{DEFAULT_PERCENTAGE, DENOMINATOR, MIN_START_PERCENTAGE};
use crate::weather::WeatherSample;

/// How far a weather transition has progressed (0-1)
///
/// The transition waits until precipitation begins/ends: `begin_fade` is the
/// fade timer in units of 256, `weather_mix_pct` the host's mix percentage.
/// Without a weather the transition counts as complete.
pub fn transition_percentage(
    weather: Option<&WeatherSample>,
    begin_fade: f32,
    weather_mix_pct: f32,
) -> f32 {
    if weather.is_none() {
        return DEFAULT_PERCENTAGE;
    }

    // Zero or negative fade wraps around the cycle; at -256 and below (or NaN)
    // the start would reach 1 and divide by zero
    let begin_fade = begin_fade.max(1.0 - DENOMINATOR);
    let begin_fade = if begin_fade > 0.0 { begin_fade } else { begin_fade + DENOMINATOR };
    let start_percentage = ((DENOMINATOR - begin_fade) / DENOMINATOR).max(MIN_START_PERCENTAGE);
    let current_percentage = (weather_mix_pct - start_percentage) / (1.0 - start_percentage);

    current_percentage.clamp(0.0, 1.0)
}

/// Ease-in curve `p^k`, computed as `2^(k * log2(p))`
///
/// `ease(0) = 0`; anything not strictly positive (including NaN) maps to 0.
#[inline]
pub fn ease(p: f32, exponent: f32) -> f32 {
    if p.is_nan() || p <= 0.0 {
        return 0.0;
    }
    (exponent * p.log2()).exp2()
}
