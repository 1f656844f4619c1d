//! Stint lap-time analytics.
//!
//! The backend hands over each stint's green-flag laps. From those this module
//! derives the fastest lap, the average and spread of the representative laps
//! (out-lap and in-lap dropped), and a degradation trend from a least-squares
//! fit of lap time against lap number. [`table`] orders the results for display.
//! [`fastest_lap`] picks the quickest timed lap out of a whole lap-time table.

mod metrics;
pub mod stats;
pub mod table;

pub use metrics::{
    ProcessedStint, StintMetrics, Trend, compute_stint_metrics, fastest_lap, process_stints,
    trim_out_and_in_laps,
};
pub use table::{SortDirection, StintColumn, compare_nulls_last, sort_by_column, sort_default};
