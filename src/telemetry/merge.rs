//! Distance-aligned merge of two drivers' telemetry traces

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use super::interpolate;
use crate::types::{Channel, TelemetrySample};

/// One row of a two-driver comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct MergedTelemetryPoint {
    /// Distance drawn from the union of both inputs
    pub distance: f64,
    /// First driver's value at `distance`
    pub value_a: Option<f64>,
    /// Second driver's value at `distance`
    pub value_b: Option<f64>,
}

impl MergedTelemetryPoint {
    /// Value for one side of the comparison.
    pub fn value(&self, side: Side) -> Option<f64> {
        match side {
            Side::A => self.value_a,
            Side::B => self.value_b,
        }
    }
}

/// Which input series a merged value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub enum Side {
    A,
    B,
}

/// Merged dataset for a dual-line chart, plus the driver → column side table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct TelemetryComparison {
    pub channel: Channel,
    pub driver_a: String,
    pub driver_b: String,
    pub points: Vec<MergedTelemetryPoint>,
}

impl TelemetryComparison {
    /// Which side of each point holds `driver`'s values.
    pub fn side_of(&self, driver: &str) -> Option<Side> {
        if self.driver_a == driver {
            Some(Side::A)
        } else if self.driver_b == driver {
            Some(Side::B)
        } else {
            None
        }
    }

    /// Chart column name for `driver`, e.g. `Speed_VER`.
    pub fn column_name(&self, driver: &str) -> Option<String> {
        self.side_of(driver).map(|_| format!("{}_{}", self.channel.wire_key(), driver))
    }

    /// `driver`'s value in `point`, or `None` if the driver is not part of this comparison.
    pub fn value_for(&self, point: &MergedTelemetryPoint, driver: &str) -> Option<Option<f64>> {
        self.side_of(driver).map(|side| point.value(side))
    }

    /// `(distance, value)` pairs for one driver, in distance order.
    pub fn series_for<'a>(
        &'a self,
        driver: &str,
    ) -> Option<impl Iterator<Item = (f64, Option<f64>)> + 'a> {
        let side = self.side_of(driver)?;
        Some(self.points.iter().map(move |p| (p.distance, p.value(side))))
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }
}

/// Merge two drivers' series for `channel` into one comparison.
///
/// ```rust
/// use slipstream::telemetry::merge;
/// use slipstream::types::{Channel, TelemetrySample};
///
/// let ver = [TelemetrySample::new(0.0, 280.0), TelemetrySample::new(20.0, 300.0)];
/// let lec = [TelemetrySample::new(10.0, 285.0)];
///
/// let comparison = merge(&ver, &lec, Channel::Speed, "VER", "LEC");
/// let distances: Vec<f64> = comparison.points.iter().map(|p| p.distance).collect();
/// assert_eq!(distances, vec![0.0, 10.0, 20.0]);
/// assert_eq!(comparison.points[1].value_a, Some(290.0));
/// assert_eq!(comparison.column_name("LEC").as_deref(), Some("Speed_LEC"));
/// ```
pub fn merge(
    series_a: &[TelemetrySample],
    series_b: &[TelemetrySample],
    channel: Channel,
    driver_a: impl Into<String>,
    driver_b: impl Into<String>,
) -> TelemetryComparison {
    TelemetryComparison {
        channel,
        driver_a: driver_a.into(),
        driver_b: driver_b.into(),
        points: merge_points(series_a, series_b),
    }
}

/// Rows keyed by the sorted union of both series' distances.
///
/// Inputs may be unsorted, of different lengths, contain duplicate distances or
/// missing readings; they are never modified. Samples with a NaN or infinite
/// distance cannot be placed on the distance axis and are skipped.
pub fn merge_points(
    series_a: &[TelemetrySample],
    series_b: &[TelemetrySample],
) -> Vec<MergedTelemetryPoint> {
    let sorted_a = sorted_copy(series_a);
    let sorted_b = sorted_copy(series_b);

    let mut distances: Vec<f64> =
        sorted_a.iter().chain(sorted_b.iter()).map(|sample| sample.distance).collect();
    distances.sort_by(f64::total_cmp);
    distances.dedup_by(|next, prev| next == prev);

    trace!(
        len_a = sorted_a.len(),
        len_b = sorted_b.len(),
        rows = distances.len(),
        "Merging telemetry series"
    );

    distances
        .into_iter()
        .map(|distance| MergedTelemetryPoint {
            distance,
            value_a: interpolate(distance, &sorted_a),
            value_b: interpolate(distance, &sorted_b),
        })
        .collect()
}

fn sorted_copy(series: &[TelemetrySample]) -> Vec<TelemetrySample> {
    let mut sorted: Vec<TelemetrySample> =
        series.iter().copied().filter(|sample| sample.distance.is_finite()).collect();

    let dropped = series.len() - sorted.len();
    if dropped > 0 {
        warn!(dropped, "Skipping telemetry samples with non-finite distance");
    }

    // Stable, so duplicate distances keep their source order
    sorted.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn samples(points: &[(f64, Option<f64>)]) -> Vec<TelemetrySample> {
        points.iter().copied().map(TelemetrySample::from).collect()
    }

    fn arb_series() -> impl Strategy<Value = Vec<TelemetrySample>> {
        // Integer-valued distances so duplicates actually occur
        prop::collection::vec(
            (0u16..400, prop::option::weighted(0.85, -50.0f64..400.0)),
            0..60,
        )
        .prop_map(|raw| {
            raw.into_iter()
                .map(|(d, v)| TelemetrySample { distance: d as f64, value: v })
                .collect()
        })
    }

    #[test]
    fn empty_inputs_give_empty_output() {
        assert!(merge_points(&[], &[]).is_empty());
    }

    #[test]
    fn one_empty_side_is_all_missing() {
        let a = samples(&[(20.0, Some(2.0)), (10.0, Some(1.0)), (10.0, Some(9.0))]);
        let rows = merge_points(&a, &[]);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], MergedTelemetryPoint { distance: 10.0, value_a: Some(1.0), value_b: None });
        assert_eq!(rows[1], MergedTelemetryPoint { distance: 20.0, value_a: Some(2.0), value_b: None });
    }

    #[test]
    fn unsorted_inputs_are_left_untouched() {
        let a = samples(&[(30.0, Some(3.0)), (10.0, Some(1.0))]);
        let before = a.clone();
        let _ = merge_points(&a, &a);
        assert_eq!(a, before);
    }

    #[test]
    fn fills_gaps_by_interpolation() {
        let a = samples(&[(0.0, Some(100.0)), (100.0, Some(0.0))]);
        let b = samples(&[(25.0, Some(55.0)), (75.0, None)]);

        let rows = merge_points(&a, &b);
        let expected = vec![
            MergedTelemetryPoint { distance: 0.0, value_a: Some(100.0), value_b: Some(55.0) },
            MergedTelemetryPoint { distance: 25.0, value_a: Some(75.0), value_b: Some(55.0) },
            MergedTelemetryPoint { distance: 75.0, value_a: Some(25.0), value_b: None },
            MergedTelemetryPoint { distance: 100.0, value_a: Some(0.0), value_b: None },
        ];
        assert_eq!(rows, expected);
    }

    #[test]
    fn nan_distances_are_skipped() {
        let a = samples(&[(f64::NAN, Some(1.0)), (5.0, Some(2.0))]);
        let rows = merge_points(&a, &[]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].distance, 5.0);
    }

    #[test]
    fn infinite_distances_are_skipped() {
        let a = samples(&[(f64::NEG_INFINITY, Some(1.0)), (10.0, Some(2.0)), (f64::INFINITY, Some(5.0))]);
        let b = samples(&[(0.0, Some(4.0))]);
        let rows = merge_points(&a, &b);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], MergedTelemetryPoint { distance: 0.0, value_a: Some(2.0), value_b: Some(4.0) });
        assert_eq!(rows[1], MergedTelemetryPoint { distance: 10.0, value_a: Some(2.0), value_b: Some(4.0) });
    }

    #[test]
    fn side_table_maps_drivers_to_columns() {
        let a = samples(&[(0.0, Some(1.0))]);
        let b = samples(&[(0.0, Some(0.0))]);
        let cmp = merge(&a, &b, Channel::Drs, "PIA", "NOR");

        assert_eq!(cmp.column_name("PIA").as_deref(), Some("DRS_PIA"));
        assert_eq!(cmp.column_name("NOR").as_deref(), Some("DRS_NOR"));
        assert_eq!(cmp.column_name("ALO"), None);
        assert_eq!(cmp.value_for(&cmp.points[0], "NOR"), Some(Some(0.0)));
        assert_eq!(cmp.value_for(&cmp.points[0], "ALO"), None);

        let pia: Vec<_> = cmp.series_for("PIA").unwrap().collect();
        assert_eq!(pia, vec![(0.0, Some(1.0))]);
    }

    proptest! {
        #[test]
        fn prop_distances_are_sorted_union(a in arb_series(), b in arb_series()) {
            let rows = merge_points(&a, &b);
            let expected: Vec<f64> = a
                .iter()
                .chain(b.iter())
                .map(|s| s.distance as u16)
                .collect::<BTreeSet<_>>()
                .into_iter()
                .map(f64::from)
                .collect();
            let actual: Vec<f64> = rows.iter().map(|p| p.distance).collect();
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn prop_native_samples_survive_exactly(a in arb_series(), b in arb_series()) {
            let rows = merge_points(&a, &b);
            let mut sorted_a = a.clone();
            sorted_a.sort_by(|x, y| x.distance.total_cmp(&y.distance));

            for row in &rows {
                if let Some(native) = sorted_a.iter().find(|s| s.distance == row.distance) {
                    prop_assert_eq!(row.value_a, native.value);
                }
            }
        }

        #[test]
        fn prop_empty_second_side(a in arb_series()) {
            let rows = merge_points(&a, &[]);
            let unique: BTreeSet<u16> = a.iter().map(|s| s.distance as u16).collect();
            prop_assert_eq!(rows.len(), unique.len());
            prop_assert!(rows.iter().all(|p| p.value_b.is_none()));
        }

        #[test]
        fn prop_merge_is_idempotent(a in arb_series(), b in arb_series()) {
            let first = merge(&a, &b, Channel::Throttle, "SAI", "ALB");
            let second = merge(&a.clone(), &b.clone(), Channel::Throttle, "SAI", "ALB");
            prop_assert_eq!(first, second);
        }
    }
}
