//! Lap identifiers and per-lap timing

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::AnalyticsError;

/// Which lap of a driver's session to fetch telemetry for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub enum LapSelector {
    /// The driver's fastest lap of the session
    #[default]
    Fastest,
    /// A 1-based lap number
    Number(u32),
}

impl fmt::Display for LapSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LapSelector::Fastest => f.write_str("fastest"),
            LapSelector::Number(n) => write!(f, "{}", n),
        }
    }
}

impl FromStr for LapSelector {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("fastest") {
            return Ok(LapSelector::Fastest);
        }
        match trimmed.parse::<u32>() {
            Ok(n) if n >= 1 => Ok(LapSelector::Number(n)),
            _ => Err(AnalyticsError::InvalidLapSelector { input: s.to_string() }),
        }
    }
}

/// Timing for one green-flag lap inside a stint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(rename_all = "camelCase")]
pub struct LapDetail {
    /// Absolute lap number in the session
    pub lap_number: u32,
    /// Lap time in seconds
    pub lap_time: f64,
}

impl LapDetail {
    pub fn new(lap_number: u32, lap_time: f64) -> Self {
        Self { lap_number, lap_time }
    }
}

/// A driver's running position at the end of one lap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(rename_all = "camelCase")]
pub struct LapPosition {
    pub lap_number: u32,
    pub driver_code: String,
    /// 1 is the race leader
    pub position: u32,
}

impl LapPosition {
    pub fn new(lap_number: u32, driver_code: impl Into<String>, position: u32) -> Self {
        Self { lap_number, driver_code: driver_code.into(), position }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lap_selector_parses_and_displays() {
        assert_eq!("fastest".parse::<LapSelector>().unwrap(), LapSelector::Fastest);
        assert_eq!("FASTEST".parse::<LapSelector>().unwrap(), LapSelector::Fastest);
        assert_eq!("17".parse::<LapSelector>().unwrap(), LapSelector::Number(17));
        assert_eq!(LapSelector::Number(17).to_string(), "17");
        assert_eq!(LapSelector::Fastest.to_string(), "fastest");
    }

    #[test]
    fn lap_selector_rejects_zero_and_garbage() {
        assert!("0".parse::<LapSelector>().is_err());
        assert!("-3".parse::<LapSelector>().is_err());
        assert!("slowest".parse::<LapSelector>().is_err());
    }
}
