// src/commands/convert.rs

use crate::config::AppConfig;
use crate::convert;
use crate::errors::AppResult;
use crate::input;
use crate::utils::print_conversion;

/// Reads one "H M S" line from stdin, converts it to Roketin time and
/// prints one line to stdout.
pub fn execute(app_config: &AppConfig) -> AppResult<()> {
    let line = input::read_input_line()?;
    log::debug!("Read input line: {:?}", line.trim_end());

    let earth = input::parse_earth_time(&line)?;
    let conversion = convert::convert(earth);
    log::debug!("Converted {} -> {}", conversion.earth, conversion.planet);

    print_conversion(&conversion, app_config.output_format)
}
