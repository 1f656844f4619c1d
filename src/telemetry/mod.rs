//! Driver-vs-driver telemetry comparison.
//!
//! Two drivers' traces for the same channel are sampled at different distances.
//! [`merge`] puts them on one axis: every distance either driver was sampled at
//! becomes a row, and each driver's value at that row is the native reading when
//! one exists or a linear [`interpolate`] between neighbours otherwise.
//!
//! ```text
//!  A: ●─────────●───────────●
//!  B:     ○──────────○
//!     ┌───┬─────┬────┬──────┐
//!     rows at the union of both axes
//! ```

mod cache;
mod interpolate;
mod merge;

pub use cache::{MergeCache, MergeCacheEntry, fingerprint};
pub use interpolate::interpolate;
pub use merge::{MergedTelemetryPoint, Side, TelemetryComparison, merge, merge_points};
