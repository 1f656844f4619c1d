//! Lap listing payloads

use serde::{Deserialize, Serialize};

use crate::{AnalyticsError, Result};

/// `{ "laps": [...] }` as returned by the driver lap listing endpoint
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LapNumbers {
    pub laps: Vec<u32>,
}

/// Decode a lap listing; a payload without `laps` lists nothing.
pub fn decode_lap_numbers(json: &str) -> Result<Vec<u32>> {
    let listing: LapNumbers = serde_json::from_str(json)
        .map_err(|e| AnalyticsError::decode("lap listing payload", e.to_string()))?;
    Ok(listing.laps)
}
