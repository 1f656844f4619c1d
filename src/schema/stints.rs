//! Stint analysis payloads

use tracing::debug;

use crate::types::Stint;
use crate::{AnalyticsError, Result};

/// Decode the stint analysis endpoint payload.
///
/// Lap details are put in lap-number order if the backend sent them otherwise.
pub fn decode_stints(json: &str) -> Result<Vec<Stint>> {
    let mut stints: Vec<Stint> = serde_json::from_str(json)
        .map_err(|e| AnalyticsError::decode("stint analysis payload", e.to_string()))?;

    for stint in &mut stints {
        let ordered = stint.lap_details.windows(2).all(|w| w[0].lap_number <= w[1].lap_number);
        if !ordered {
            debug!(
                driver = %stint.driver_code,
                stint = stint.stint_number,
                "Reordering stint laps by lap number"
            );
            stint.lap_details.sort_by_key(|lap| lap.lap_number);
        }
    }

    debug!(stints = stints.len(), "Decoded stint analysis payload");
    Ok(stints)
}
