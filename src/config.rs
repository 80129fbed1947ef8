// src/config.rs

use crate::types::OutputFormat;

// === Application Info ===
pub const APP_NAME: &'static str = "roketin_time";

// === Time Scale Settings ===
// Length of the Earth day, in SI seconds.
pub const SECONDS_PER_EARTH_DAY: i64 = 24 * 60 * 60;

// Subdivisions of the Roketin day. The whole day is 100,000 Roketin
// seconds; 10,000 make an hour and 100 make a minute.
pub const ROK_UNITS_PER_DAY: f64 = 100_000.0;
pub const ROK_UNITS_PER_HOUR: f64 = 10_000.0;
pub const ROK_UNITS_PER_MINUTE: f64 = 100.0;

/// Runtime settings resolved from the command line, handed to each
/// command's `execute`.
#[derive(Debug, Clone, Copy)]
pub struct AppConfig {
    pub output_format: OutputFormat,
}
