//! Source trait for backend data

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::stint::{ProcessedStint, process_stints};
use crate::telemetry::{TelemetryComparison, merge};
use crate::types::{Channel, LapSelector, SessionKey, Stint, TelemetrySample};
use crate::{AnalyticsError, Result};

/// One driver's trace for one channel on one lap.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct TelemetryRequest {
    pub session: SessionKey,
    pub driver: String,
    pub lap: LapSelector,
    pub channel: Channel,
}

impl TelemetryRequest {
    pub fn new(
        session: SessionKey,
        driver: impl Into<String>,
        lap: LapSelector,
        channel: Channel,
    ) -> Self {
        Self { session, driver: driver.into(), lap, channel }
    }
}

/// Trait for analytics data sources
///
/// Sources abstract over where backend payloads come from (HTTP client,
/// fixture directory, in-memory tables) and return decoded domain types.
#[async_trait::async_trait]
pub trait TelemetrySource: Send + Sync + 'static {
    /// Telemetry samples for one driver, lap and channel
    ///
    /// Returns:
    /// - `Ok(samples)` - Samples in source order, possibly empty
    /// - `Err(AnalyticsError::NotFound)` - No such driver or lap
    /// - `Err(e)` - Fetch or decode failure
    async fn telemetry(&self, request: &TelemetryRequest) -> Result<Vec<TelemetrySample>>;

    /// Stints for every driver in a session, green-flag laps only
    async fn stints(&self, session: &SessionKey) -> Result<Vec<Stint>>;

    /// Lap numbers a driver completed in a session
    async fn lap_numbers(&self, session: &SessionKey, driver: &str) -> Result<Vec<u32>>;
}

#[async_trait::async_trait]
impl<S: TelemetrySource + ?Sized> TelemetrySource for Arc<S> {
    async fn telemetry(&self, request: &TelemetryRequest) -> Result<Vec<TelemetrySample>> {
        (**self).telemetry(request).await
    }

    async fn stints(&self, session: &SessionKey) -> Result<Vec<Stint>> {
        (**self).stints(session).await
    }

    async fn lap_numbers(&self, session: &SessionKey, driver: &str) -> Result<Vec<u32>> {
        (**self).lap_numbers(session, driver).await
    }
}

/// Laps available for the lap selector. No driver selected means no laps.
pub async fn available_laps<S>(source: &S, session: &SessionKey, driver: &str) -> Result<Vec<u32>>
where
    S: TelemetrySource + ?Sized,
{
    if driver.trim().is_empty() {
        return Ok(Vec::new());
    }
    source.lap_numbers(session, driver).await
}

/// Fetch both drivers' traces concurrently and merge them.
///
/// Both requests must name the same channel; a mismatch fails with
/// [`AnalyticsError::ChannelMismatch`] before anything is fetched.
pub async fn compare<S>(
    source: &S,
    request_a: &TelemetryRequest,
    request_b: &TelemetryRequest,
) -> Result<TelemetryComparison>
where
    S: TelemetrySource + ?Sized,
{
    if request_a.channel != request_b.channel {
        return Err(AnalyticsError::ChannelMismatch {
            channel_a: request_a.channel,
            channel_b: request_b.channel,
        });
    }

    let (series_a, series_b) =
        futures::try_join!(source.telemetry(request_a), source.telemetry(request_b))?;

    debug!(
        driver_a = %request_a.driver,
        driver_b = %request_b.driver,
        channel = %request_a.channel,
        "Fetched comparison telemetry"
    );

    Ok(merge(
        &series_a,
        &series_b,
        request_a.channel,
        request_a.driver.clone(),
        request_b.driver.clone(),
    ))
}

/// Fetch a session's stints and derive their metrics in table order.
pub async fn session_stints<S>(source: &S, session: &SessionKey) -> Result<Vec<ProcessedStint>>
where
    S: TelemetrySource + ?Sized,
{
    let stints = source.stints(session).await?;
    Ok(process_stints(stints))
}
