//! Tyre stints and the session they belong to

use serde::{Deserialize, Serialize};
use std::fmt;

use super::LapDetail;

/// Identifies one session of one event, e.g. `2024 / Monaco / R`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct SessionKey {
    pub year: u16,
    pub event: String,
    pub session: String,
}

impl SessionKey {
    pub fn new(year: u16, event: impl Into<String>, session: impl Into<String>) -> Self {
        Self { year, event: event.into(), session: session.into() }
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.year, self.event, self.session)
    }
}

/// A contiguous run of laps on one tyre set.
///
/// `start_lap`/`end_lap` are the reported bounds; `lap_details` holds only the
/// green-flag laps inside them and is the source for every derived metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(rename_all = "camelCase")]
pub struct Stint {
    pub driver_code: String,
    pub stint_number: u32,
    pub compound: String,
    pub start_lap: u32,
    pub end_lap: u32,
    #[serde(default)]
    pub lap_details: Vec<LapDetail>,
}

impl Stint {
    /// Laps covered by the reported bounds, regardless of how many were filtered.
    pub fn stint_length(&self) -> u32 {
        let laps = (u64::from(self.end_lap) + 1).saturating_sub(u64::from(self.start_lap));
        u32::try_from(laps).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stint(start_lap: u32, end_lap: u32) -> Stint {
        Stint {
            driver_code: "HAM".to_string(),
            stint_number: 1,
            compound: "MEDIUM".to_string(),
            start_lap,
            end_lap,
            lap_details: vec![],
        }
    }

    #[test]
    fn stint_length_uses_reported_bounds() {
        assert_eq!(stint(1, 18).stint_length(), 18);
        assert_eq!(stint(19, 19).stint_length(), 1);
    }

    #[test]
    fn stint_length_saturates_on_inverted_bounds() {
        assert_eq!(stint(10, 3).stint_length(), 0);
    }

    #[test]
    fn stint_length_saturates_at_largest_lap_number() {
        assert_eq!(stint(1, u32::MAX).stint_length(), u32::MAX);
        assert_eq!(stint(0, u32::MAX).stint_length(), u32::MAX);
    }
}
