//! Largest single-lap position swings of a race
//!
//! Positions are compared between each pair of neighbouring laps in the data
//! (so a lap missing from the payload is skipped over, not treated as a
//! swing). Only a driver classified on both laps can gain or lose places.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::types::LapPosition;

/// A swing must be larger than this many places to count as a key moment.
pub const SIGNIFICANT_PLACES: i64 = 1;

/// One driver's position change from the previous lap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(rename_all = "camelCase")]
pub struct PositionChange {
    pub driver_code: String,
    /// Lap on which the new position was recorded
    pub lap_number: u32,
    pub from: u32,
    pub to: u32,
}

impl PositionChange {
    /// Places gained, negative for places lost.
    pub fn places(&self) -> i64 {
        i64::from(self.from) - i64::from(self.to)
    }
}

/// Biggest gain and loss of a race, each present only when significant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(rename_all = "camelCase")]
pub struct KeyMoments {
    pub biggest_gain: Option<PositionChange>,
    pub biggest_loss: Option<PositionChange>,
}

impl KeyMoments {
    /// No driver moved more than [`SIGNIFICANT_PLACES`] in a single lap.
    pub fn is_empty(&self) -> bool {
        self.biggest_gain.is_none() && self.biggest_loss.is_none()
    }
}

/// Find the largest single-lap gain and loss in `positions`.
///
/// Ties keep the earliest lap, then the driver listed first for that lap. A
/// driver listed twice for the same lap keeps the later position.
///
/// ```rust
/// use slipstream::positions::key_moments;
/// use slipstream::types::LapPosition;
///
/// let positions = [
///     LapPosition::new(1, "HUL", 9),
///     LapPosition::new(1, "OCO", 5),
///     LapPosition::new(2, "HUL", 6),
///     LapPosition::new(2, "OCO", 8),
/// ];
/// let moments = key_moments(&positions);
/// let gain = moments.biggest_gain.unwrap();
/// assert_eq!((gain.driver_code.as_str(), gain.from, gain.to), ("HUL", 9, 6));
/// assert_eq!(moments.biggest_loss.unwrap().places(), -3);
/// ```
pub fn key_moments(positions: &[LapPosition]) -> KeyMoments {
    let mut by_lap: BTreeMap<u32, Vec<(&str, u32)>> = BTreeMap::new();
    for entry in positions {
        let lap = by_lap.entry(entry.lap_number).or_default();
        match lap.iter_mut().find(|(driver, _)| *driver == entry.driver_code) {
            Some(slot) => slot.1 = entry.position,
            None => lap.push((entry.driver_code.as_str(), entry.position)),
        }
    }

    let laps: Vec<(u32, &Vec<(&str, u32)>)> = by_lap.iter().map(|(&n, lap)| (n, lap)).collect();
    let mut gain: Option<PositionChange> = None;
    let mut loss: Option<PositionChange> = None;

    for pair in laps.windows(2) {
        let (_, previous) = pair[0];
        let (lap_number, current) = pair[1];

        for &(driver, to) in current.iter() {
            let Some(&(_, from)) = previous.iter().find(|(d, _)| *d == driver) else {
                continue;
            };
            let change = PositionChange { driver_code: driver.to_string(), lap_number, from, to };
            let places = change.places();

            if places > gain.as_ref().map_or(0, PositionChange::places) {
                gain = Some(change);
            } else if places < loss.as_ref().map_or(0, PositionChange::places) {
                loss = Some(change);
            }
        }
    }

    let moments = KeyMoments {
        biggest_gain: gain.filter(|c| c.places() > SIGNIFICANT_PLACES),
        biggest_loss: loss.filter(|c| c.places() < -SIGNIFICANT_PLACES),
    };
    debug!(laps = laps.len(), significant = !moments.is_empty(), "Scanned lap positions");
    moments
}
