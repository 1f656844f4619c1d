//! Lap-by-lap running order as returned by the lap positions endpoint
//!
//! The endpoint returns one wide row per lap,
//! `{ "LapNumber": u32, "<DRIVER>": position | null, ... }`. A `null` position
//! means the driver was not classified on that lap (retired or not yet timed).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::types::LapPosition;
use crate::{AnalyticsError, Result};

/// One raw row from the lap positions endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LapPositionRow {
    #[serde(rename = "LapNumber")]
    pub lap_number: u32,
    /// Positions keyed by driver code
    #[serde(flatten)]
    pub positions: Map<String, Value>,
}

impl LapPositionRow {
    /// Classified drivers on this lap; `null` entries are skipped.
    pub fn positions(&self) -> Result<Vec<LapPosition>> {
        let mut positions = Vec::with_capacity(self.positions.len());
        for (driver, value) in &self.positions {
            if value.is_null() {
                continue;
            }
            let position = position_number(value).ok_or_else(|| {
                AnalyticsError::decode(
                    "lap positions row",
                    format!("expected a position for {} on lap {}, found {}", driver, self.lap_number, value),
                )
            })?;
            positions.push(LapPosition::new(self.lap_number, driver.clone(), position));
        }
        Ok(positions)
    }
}

/// The backend emits positions as floats (`3.0`) as often as integers.
fn position_number(value: &Value) -> Option<u32> {
    if let Some(n) = value.as_u64() {
        return u32::try_from(n).ok().filter(|&n| n >= 1);
    }
    let n = value.as_f64()?;
    if n.fract() == 0.0 && n >= 1.0 && n <= f64::from(u32::MAX) {
        Some(n as u32)
    } else {
        None
    }
}

/// Decode a lap positions payload into one entry per classified driver per lap.
pub fn decode_lap_positions(json: &str) -> Result<Vec<LapPosition>> {
    let rows: Vec<LapPositionRow> = serde_json::from_str(json)
        .map_err(|e| AnalyticsError::decode("lap positions payload", e.to_string()))?;

    let mut positions = Vec::new();
    for row in &rows {
        positions.extend(row.positions()?);
    }

    debug!(laps = rows.len(), entries = positions.len(), "Decoded lap positions payload");
    Ok(positions)
}
