// src/utils.rs
use crate::errors::AppResult;
use crate::types::{Conversion, OutputFormat};

// Formats an hour/minute/second triple, two digits per field. Values
// above 99 or below zero print at their natural width.
pub fn format_hms(hours: i64, minutes: i64, seconds: i64) -> String {
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Renders a conversion to stdout in the requested format.
pub fn print_conversion(conversion: &Conversion, format: OutputFormat) -> AppResult<()> {
    match format {
        OutputFormat::Text => println!("{}", conversion),
        OutputFormat::Json => println!("{}", serde_json::to_string(conversion)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_single_digits() {
        assert_eq!(format_hms(0, 5, 9), "00:05:09");
    }

    #[test]
    fn wide_and_negative_fields_keep_natural_width() {
        assert_eq!(format_hms(-1, 100, 0), "-1:100:00");
    }
}
