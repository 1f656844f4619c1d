//! Type-safe Rust library for Formula 1 telemetry comparison and stint analytics.
//!
//! Slipstream is the computational core of a race-analysis dashboard: it lines
//! up two drivers' telemetry on a common distance axis and turns tyre stints
//! into lap-time metrics, independent of how the data is fetched or drawn.
//!
//! # Features
//!
//! - **Telemetry comparison**: Merge two distance-sampled traces with linear
//!   interpolation and explicit missing values
//! - **Stint analytics**: Fastest lap, average pace, consistency and degradation
//!   trend per stint, with a null-last sortable table
//! - **Race moments**: Largest single-lap position gain and loss
//! - **Backend seam**: Async [`TelemetrySource`] trait with a fixture-backed
//!   implementation and a recompute-on-select [`ComparisonDriver`]
//! - **Presentation helpers**: Season-aware driver colours, compound colours and
//!   lap-time formatting
//!
//! # Quick Start
//!
//! ```rust
//! use slipstream::{Channel, LapDetail, TelemetrySample, compute_stint_metrics, merge};
//!
//! let ver = [TelemetrySample::new(0.0, 280.0), TelemetrySample::new(20.0, 300.0)];
//! let lec = [TelemetrySample::new(10.0, 285.0)];
//! let comparison = merge(&ver, &lec, Channel::Speed, "VER", "LEC");
//! assert_eq!(comparison.points[1].value_a, Some(290.0));
//!
//! let laps = [
//!     LapDetail::new(1, 92.0),
//!     LapDetail::new(2, 89.0),
//!     LapDetail::new(3, 88.8),
//!     LapDetail::new(4, 88.6),
//!     LapDetail::new(5, 91.5),
//! ];
//! let metrics = compute_stint_metrics(&laps);
//! assert_eq!(metrics.fastest_lap, Some(88.6));
//! ```
//!
//! ## Example (fixture-backed comparison)
//!
//! ```rust,no_run
//! use futures::StreamExt;
//! use slipstream::comparison::ComparisonSelection;
//! use slipstream::{Channel, LapSelector, SessionKey, Slipstream};
//!
//! #[tokio::main]
//! async fn main() -> slipstream::Result<()> {
//!     let source = Slipstream::fixtures("test-data/fixtures")?;
//!     let selection = ComparisonSelection::new(
//!         SessionKey::new(2024, "Monaco Grand Prix", "R"),
//!         Channel::Throttle,
//!         ("LEC", LapSelector::Fastest),
//!         ("PIA", LapSelector::Number(40)),
//!     );
//!
//!     let handle = Slipstream::compare(source, selection);
//!     let mut updates = Box::pin(handle.updates());
//!     while let Some(comparison) = updates.next().await {
//!         println!("{} points", comparison.len());
//!     }
//!     Ok(())
//! }
//! ```

// Core types and error handling
mod error;
#[cfg(any(test, feature = "benchmark"))]
pub mod test_utils;
pub mod types;

// Analytics
pub mod format;
pub mod palette;
pub mod positions;
pub mod stint;
pub mod telemetry;

// Backend seam
pub mod comparison;
pub mod config;
pub mod schema;
pub mod source;
pub mod sources;

// Core exports
pub use error::*;
pub use types::*;

// Analytics exports
pub use format::{format_degradation, format_lap_time, format_time};
pub use positions::{KeyMoments, PositionChange, key_moments};
pub use stint::{
    ProcessedStint, StintMetrics, Trend, compute_stint_metrics, fastest_lap, process_stints,
};
pub use telemetry::{MergedTelemetryPoint, TelemetryComparison, interpolate, merge};

// Backend exports
pub use comparison::{ComparisonDriver, ComparisonHandle};
pub use config::AnalyticsConfig;
pub use source::{TelemetryRequest, TelemetrySource};
pub use sources::FixtureSource;

/// Unified entry point for analytics sources and comparisons.
///
/// # Examples
///
/// ```rust,no_run
/// use slipstream::Slipstream;
///
/// # fn main() -> slipstream::Result<()> {
/// let source = Slipstream::fixtures("test-data/fixtures")?;
/// # Ok(())
/// # }
/// ```
pub struct Slipstream;

impl Slipstream {
    /// Open a directory of recorded backend responses.
    ///
    /// See [`FixtureSource`] for the expected layout.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::File`] if `root` is not a directory.
    pub fn fixtures<P: AsRef<std::path::Path>>(root: P) -> Result<FixtureSource> {
        FixtureSource::new(root)
    }

    /// Start comparing `selection` over `source`.
    ///
    /// Must be called from within a tokio runtime. The comparison task stops
    /// when the returned handle is dropped.
    pub fn compare<S: TelemetrySource>(
        source: S,
        selection: comparison::ComparisonSelection,
    ) -> ComparisonHandle {
        ComparisonDriver::spawn(source, Some(selection))
    }
}
