//! Test utilities for fixture path resolution and synthetic data
//!
//! Shared by unit tests and the criterion benches (`--features benchmark`).

#![cfg(any(test, feature = "benchmark"))]

use std::path::{Path, PathBuf};

use crate::types::{LapDetail, Stint, TelemetrySample};

/// Guidance shown when recorded backend fixtures are missing from the checkout.
pub const FIXTURE_INSTALL_GUIDANCE: &str = "Backend fixtures are stored under test-data/fixtures/<year>/<event>/<session>/. Restore them from the repository checkout.";

/// Error returned when a required fixture cannot be located.
#[derive(Debug, Clone)]
pub struct FixtureError {
    message: String,
}

impl FixtureError {
    fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl std::fmt::Display for FixtureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for FixtureError {}

/// Require that a specific fixture exists on disk.
pub fn require_fixture<P: AsRef<Path>>(path: P) -> Result<PathBuf, FixtureError> {
    let path_ref = path.as_ref();
    if path_ref.exists() {
        Ok(path_ref.to_path_buf())
    } else {
        Err(FixtureError::new(format!(
            "Missing backend fixture: {}. {}",
            path_ref.display(),
            FIXTURE_INSTALL_GUIDANCE
        )))
    }
}

/// `test-data/` at the crate root, independent of the working directory
pub fn test_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test-data")
}

/// Root directory for [`FixtureSource`](crate::sources::FixtureSource)
pub fn require_fixture_root() -> Result<PathBuf, FixtureError> {
    require_fixture(test_data_dir().join("fixtures"))
}

/// Speed-like trace over one lap: `samples` points spread evenly over
/// `lap_length` metres, shifted by `offset` metres.
///
/// Every `gap_every`-th reading is missing when `gap_every` is non-zero.
pub fn synthetic_trace(
    samples: usize,
    lap_length: f64,
    offset: f64,
    gap_every: usize,
) -> Vec<TelemetrySample> {
    if samples == 0 {
        return Vec::new();
    }
    let step = lap_length / samples as f64;
    (0..samples)
        .map(|i| {
            let distance = offset + i as f64 * step;
            if gap_every != 0 && i % gap_every == gap_every - 1 {
                return TelemetrySample::missing(distance);
            }
            let phase = distance / lap_length * std::f64::consts::TAU * 4.0;
            TelemetrySample::new(distance, 220.0 + 80.0 * phase.sin())
        })
        .collect()
}

/// Stint whose green-flag laps get slower by `slope` seconds per lap.
///
/// The out-lap and in-lap are 4 s and 3 s slower so trimming is observable.
pub fn synthetic_stint(
    driver: &str,
    stint_number: u32,
    start_lap: u32,
    laps: u32,
    base_time: f64,
    slope: f64,
) -> Stint {
    let lap_details: Vec<LapDetail> = (0..laps)
        .map(|i| {
            let mut lap_time = base_time + slope * f64::from(i);
            if i == 0 {
                lap_time += 4.0;
            } else if i + 1 == laps {
                lap_time += 3.0;
            }
            LapDetail::new(start_lap + i, lap_time)
        })
        .collect();

    Stint {
        driver_code: driver.to_string(),
        stint_number,
        compound: "MEDIUM".to_string(),
        start_lap,
        end_lap: start_lap + laps.saturating_sub(1),
        lap_details,
    }
}

/// A race's worth of stints: `drivers` drivers, each with `stints` stints of
/// `laps` laps.
pub fn synthetic_session(drivers: usize, stints: u32, laps: u32) -> Vec<Stint> {
    (0..drivers)
        .flat_map(|d| {
            let driver = format!("D{:02}", d);
            (0..stints).map(move |s| {
                let base = 80.0 + d as f64 * 0.1;
                synthetic_stint(&driver, s + 1, 1 + s * laps, laps, base, 0.05 * f64::from(s + 1))
            })
        })
        .collect()
}
