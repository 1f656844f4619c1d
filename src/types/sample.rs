//! Single-channel telemetry samples

use serde::{Deserialize, Serialize};

/// One point of a single-channel series, keyed by distance along the lap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct TelemetrySample {
    /// Meters from the start/finish line
    pub distance: f64,
    /// Channel reading, `None` when the backend had no value
    pub value: Option<f64>,
}

impl TelemetrySample {
    /// Sample with a reading.
    pub fn new(distance: f64, value: f64) -> Self {
        Self { distance, value: Some(value) }
    }

    /// Sample at a distance where the channel has no reading.
    pub fn missing(distance: f64) -> Self {
        Self { distance, value: None }
    }
}

impl From<(f64, f64)> for TelemetrySample {
    fn from((distance, value): (f64, f64)) -> Self {
        Self::new(distance, value)
    }
}

impl From<(f64, Option<f64>)> for TelemetrySample {
    fn from((distance, value): (f64, Option<f64>)) -> Self {
        Self { distance, value }
    }
}
