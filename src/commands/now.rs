// src/commands/now.rs

use chrono::{Local, Timelike};

use crate::config::AppConfig;
use crate::convert;
use crate::errors::AppResult;
use crate::types::EarthTime;
use crate::utils::print_conversion;

/// Converts the current local wall-clock time of day.
pub fn execute(app_config: &AppConfig) -> AppResult<()> {
    let now = Local::now();
    let earth = EarthTime::new(
        now.hour() as i64,
        now.minute() as i64,
        now.second() as i64,
    );
    log::debug!("Local time of day: {}", earth);

    let conversion = convert::convert(earth);
    print_conversion(&conversion, app_config.output_format)
}
