//! Per-stint pace metrics

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::stats::{least_squares_slope, mean, population_std_dev};
use crate::types::{LapDetail, Stint};

/// Summary metrics for one stint's green-flag laps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(rename_all = "camelCase")]
pub struct StintMetrics {
    /// Quickest lap including out-lap and in-lap
    pub fastest_lap: Option<f64>,
    /// Mean lap time without out-lap and in-lap
    pub avg_lap_time: Option<f64>,
    /// Population standard deviation without out-lap and in-lap
    pub consistency: Option<f64>,
    /// Seconds per lap trend without out-lap and in-lap
    pub degradation: Option<f64>,
}

impl StintMetrics {
    /// Direction of the lap-time trend, if one could be computed.
    pub fn trend(&self) -> Option<Trend> {
        self.degradation.map(Trend::from_slope)
    }
}

/// How lap times moved over a stint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub enum Trend {
    /// Lap times falling, negative slope
    Improving,
    /// Lap times flat or rising
    Degrading,
}

impl Trend {
    pub fn from_slope(slope: f64) -> Self {
        if slope < 0.0 { Trend::Improving } else { Trend::Degrading }
    }
}

/// Green-flag laps without the out-lap and in-lap.
///
/// Stints of two laps or fewer have nothing left once both ends are dropped.
pub fn trim_out_and_in_laps(lap_details: &[LapDetail]) -> &[LapDetail] {
    if lap_details.len() > 2 { &lap_details[1..lap_details.len() - 1] } else { &[] }
}

/// Metrics for one stint's laps, ordered by lap number.
///
/// ```rust
/// use slipstream::stint::compute_stint_metrics;
/// use slipstream::types::LapDetail;
///
/// let laps = [
///     LapDetail::new(1, 90.0),
///     LapDetail::new(2, 89.0),
///     LapDetail::new(3, 88.5),
///     LapDetail::new(4, 88.6),
///     LapDetail::new(5, 90.5),
/// ];
/// let metrics = compute_stint_metrics(&laps);
/// assert_eq!(metrics.fastest_lap, Some(88.5));
/// assert!((metrics.degradation.unwrap() + 0.2).abs() < 1e-9);
/// ```
pub fn compute_stint_metrics(lap_details: &[LapDetail]) -> StintMetrics {
    let fastest_lap = lap_details.iter().map(|lap| lap.lap_time).reduce(f64::min);

    let trimmed = trim_out_and_in_laps(lap_details);
    let trimmed_times: Vec<f64> = trimmed.iter().map(|lap| lap.lap_time).collect();

    StintMetrics {
        fastest_lap,
        avg_lap_time: mean(&trimmed_times),
        consistency: population_std_dev(&trimmed_times),
        degradation: least_squares_slope(
            trimmed.iter().map(|lap| (f64::from(lap.lap_number), lap.lap_time)),
        ),
    }
}

/// Quickest timed lap in a driver's lap-time table.
///
/// Rows without a positive, finite time are untimed and ignored. The earliest
/// lap wins a tie.
pub fn fastest_lap(lap_details: &[LapDetail]) -> Option<LapDetail> {
    lap_details
        .iter()
        .copied()
        .filter(|lap| lap.lap_time.is_finite() && lap.lap_time > 0.0)
        .fold(None, |best, lap| match best {
            Some(best) if best.lap_time <= lap.lap_time => Some(best),
            _ => Some(lap),
        })
}

/// A stint together with its derived metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(rename_all = "camelCase")]
pub struct ProcessedStint {
    /// `"<driver>-<stint number>"`, unique within a session
    pub id: String,
    #[serde(flatten)]
    pub stint: Stint,
    pub stint_length: u32,
    #[serde(flatten)]
    pub metrics: StintMetrics,
}

impl ProcessedStint {
    pub fn new(stint: Stint) -> Self {
        let metrics = compute_stint_metrics(&stint.lap_details);
        Self {
            id: format!("{}-{}", stint.driver_code, stint.stint_number),
            stint_length: stint.stint_length(),
            stint,
            metrics,
        }
    }
}

/// Derive metrics for every stint and put them in default table order.
pub fn process_stints(stints: impl IntoIterator<Item = Stint>) -> Vec<ProcessedStint> {
    let mut processed: Vec<ProcessedStint> = stints.into_iter().map(ProcessedStint::new).collect();
    super::table::sort_default(&mut processed);
    debug!(stints = processed.len(), "Processed stint metrics");
    processed
}
