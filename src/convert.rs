// src/convert.rs

use crate::config::{
    ROK_UNITS_PER_DAY, ROK_UNITS_PER_HOUR, ROK_UNITS_PER_MINUTE, SECONDS_PER_EARTH_DAY,
};
use crate::types::{Conversion, EarthTime, PlanetTime};

/// Seconds since Earth midnight. No clamping, so out-of-range fields
/// simply carry through the arithmetic.
pub fn total_earth_seconds(earth: EarthTime) -> i64 {
    earth.hours * 3600 + earth.minutes * 60 + earth.seconds
}

/// Position within the Roketin day, in (possibly fractional) Roketin
/// seconds.
pub fn total_rok_units(earth: EarthTime) -> f64 {
    let fraction_of_day = total_earth_seconds(earth) as f64 / SECONDS_PER_EARTH_DAY as f64;
    fraction_of_day * ROK_UNITS_PER_DAY
}

/// Decomposes an Earth time into Roketin hours, minutes and seconds.
///
/// Uses floor division with a Euclidean remainder, so a negative Earth
/// time yields a negative hour with non-negative minutes and seconds.
pub fn to_planet_time(earth: EarthTime) -> PlanetTime {
    let units = total_rok_units(earth);

    let hours = (units / ROK_UNITS_PER_HOUR).floor();
    let remainder = units.rem_euclid(ROK_UNITS_PER_HOUR);
    let minutes = (remainder / ROK_UNITS_PER_MINUTE).floor();
    let seconds = remainder.rem_euclid(ROK_UNITS_PER_MINUTE).floor();

    PlanetTime::new(hours as i64, minutes as i64, seconds as i64)
}

/// Pairs an Earth time with its Roketin counterpart.
pub fn convert(earth: EarthTime) -> Conversion {
    Conversion {
        earth,
        planet: to_planet_time(earth),
    }
}
