//! Linear interpolation of one telemetry series at an arbitrary distance

use crate::types::TelemetrySample;

/// Value of `sorted` at `distance`.
///
/// `sorted` must be ordered by ascending distance. A native sample at exactly
/// `distance` is returned unchanged (the first one if several share the
/// distance). Otherwise the nearest samples on either side are blended
/// linearly. There is no extrapolation: past either end the nearest sample's
/// value is returned, and a missing reading on one side yields the other side's
/// reading instead of interpolating across the gap. A neighbour at an infinite
/// distance cannot be blended against, so the finite neighbour answers alone.
///
/// ```rust
/// use slipstream::telemetry::interpolate;
/// use slipstream::types::TelemetrySample;
///
/// let series = [TelemetrySample::new(0.0, 100.0), TelemetrySample::new(10.0, 200.0)];
/// assert_eq!(interpolate(5.0, &series), Some(150.0));
/// assert_eq!(interpolate(10.0, &series), Some(200.0));
/// assert_eq!(interpolate(25.0, &series), Some(200.0));
/// assert_eq!(interpolate(5.0, &[]), None);
/// ```
pub fn interpolate(distance: f64, sorted: &[TelemetrySample]) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }

    if let Some(exact) = sorted.iter().find(|sample| sample.distance == distance) {
        return exact.value;
    }

    let (before, after) = bracket(distance, sorted);

    match (before, after) {
        (None, None) => None,
        (Some(before), None) => before.value,
        (None, Some(after)) => after.value,
        (Some(before), Some(after)) => match (before.value, after.value) {
            (None, other) | (other, None) => other,
            _ if !before.distance.is_finite() => after.value,
            _ if !after.distance.is_finite() => before.value,
            (Some(lo), Some(hi)) => {
                let ratio = (distance - before.distance) / (after.distance - before.distance);
                Some(lo + ratio * (hi - lo))
            }
        },
    }
}

/// Last sample at or before `distance` and first sample after it, by linear scan.
fn bracket(
    distance: f64,
    sorted: &[TelemetrySample],
) -> (Option<&TelemetrySample>, Option<&TelemetrySample>) {
    let mut before = None;
    for sample in sorted {
        if sample.distance <= distance {
            before = Some(sample);
        } else {
            return (before, Some(sample));
        }
    }
    (before, None)
}
