//! Telemetry rows as returned by the channel endpoints
//!
//! Each endpoint returns an array of `{ "Distance": f64, "<WireKey>": f64 | null }`
//! objects. The value key depends on the channel (`Speed`, `Throttle`, `RPM`, ...).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::types::{Channel, TelemetrySample};
use crate::{AnalyticsError, Result};

/// One raw row from a telemetry endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryRow {
    /// Meters along the lap
    #[serde(rename = "Distance")]
    pub distance: f64,
    /// Channel readings keyed by wire key
    #[serde(flatten)]
    pub values: Map<String, Value>,
}

impl TelemetryRow {
    /// Reading for `channel`; absent keys and `null` are missing readings.
    pub fn value(&self, channel: Channel) -> Result<Option<f64>> {
        match self.values.get(channel.wire_key()) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => value.as_f64().map(Some).ok_or_else(|| {
                AnalyticsError::decode(
                    format!("{} telemetry row", channel),
                    format!("expected a number at distance {}, found {}", self.distance, value),
                )
            }),
        }
    }

    pub fn from_sample(sample: &TelemetrySample, channel: Channel) -> Self {
        let mut values = Map::new();
        let value = sample
            .value
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null);
        values.insert(channel.wire_key().to_string(), value);
        Self { distance: sample.distance, values }
    }
}

/// Decode a telemetry endpoint payload for `channel`.
pub fn decode_telemetry(json: &str, channel: Channel) -> Result<Vec<TelemetrySample>> {
    let rows: Vec<TelemetryRow> = serde_json::from_str(json).map_err(|e| {
        AnalyticsError::decode(format!("{} telemetry payload", channel), e.to_string())
    })?;

    let samples = rows
        .iter()
        .map(|row| Ok(TelemetrySample { distance: row.distance, value: row.value(channel)? }))
        .collect::<Result<Vec<_>>>()?;

    debug!(channel = %channel, samples = samples.len(), "Decoded telemetry payload");
    Ok(samples)
}

/// Encode samples in the endpoint's row format.
pub fn encode_telemetry(samples: &[TelemetrySample], channel: Channel) -> Result<String> {
    let rows: Vec<TelemetryRow> =
        samples.iter().map(|sample| TelemetryRow::from_sample(sample, channel)).collect();
    Ok(serde_json::to_string(&rows)?)
}
