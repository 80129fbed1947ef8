// src/types.rs
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

use crate::utils::format_hms;

// --- Domain Types ---

/// A time of day on Earth, as read from input. Fields are not range
/// checked; minutes >= 60 or negative values carry through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EarthTime {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl EarthTime {
    pub fn new(hours: i64, minutes: i64, seconds: i64) -> Self {
        EarthTime { hours, minutes, seconds }
    }
}

impl fmt::Display for EarthTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_hms(self.hours, self.minutes, self.seconds))
    }
}

/// A time of day on the Roketin scale, derived from an [`EarthTime`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanetTime {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl PlanetTime {
    pub fn new(hours: i64, minutes: i64, seconds: i64) -> Self {
        PlanetTime { hours, minutes, seconds }
    }
}

impl fmt::Display for PlanetTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_hms(self.hours, self.minutes, self.seconds))
    }
}

/// An Earth time paired with its Roketin counterpart; the unit of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub earth: EarthTime,
    pub planet: PlanetTime,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "on earth {}, on planet Roketin Planet : {}",
            self.earth, self.planet
        )
    }
}

// --- CLI Enums ---

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Single plain-text line
    #[value(name = "text")]
    Text,
    /// Single-line JSON object
    #[value(name = "json")]
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earth_time_is_zero_padded() {
        let t = EarthTime::new(5, 3, 9);
        assert_eq!(t.to_string(), "05:03:09");
    }

    #[test]
    fn conversion_line_matches_expected_shape() {
        let conversion = Conversion {
            earth: EarthTime::new(12, 0, 0),
            planet: PlanetTime::new(5, 0, 0),
        };
        assert_eq!(
            conversion.to_string(),
            "on earth 12:00:00, on planet Roketin Planet : 05:00:00"
        );
    }

    #[test]
    fn conversion_serializes_both_sides() {
        let conversion = Conversion {
            earth: EarthTime::new(23, 59, 59),
            planet: PlanetTime::new(9, 99, 98),
        };
        let json = serde_json::to_string(&conversion).unwrap();
        assert_eq!(
            json,
            r#"{"earth":{"hours":23,"minutes":59,"seconds":59},"planet":{"hours":9,"minutes":99,"seconds":98}}"#
        );
    }
}
