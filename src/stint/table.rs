//! Ordering for the stint analysis table

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

use super::ProcessedStint;
use crate::AnalyticsError;

/// Sortable table columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(rename_all = "camelCase")]
pub enum StintColumn {
    Driver,
    Length,
    Fastest,
    Average,
    Consistency,
    Degradation,
}

impl FromStr for StintColumn {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "driver" | "drivercode" => Ok(StintColumn::Driver),
            "length" | "stintlength" => Ok(StintColumn::Length),
            "fastest" | "fastestlap" => Ok(StintColumn::Fastest),
            "average" | "avglaptime" => Ok(StintColumn::Average),
            "consistency" => Ok(StintColumn::Consistency),
            "degradation" => Ok(StintColumn::Degradation),
            _ => Err(AnalyticsError::UnknownColumn { name: s.to_string() }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Driver code A-Z, then stint number within each driver.
pub fn sort_default(stints: &mut [ProcessedStint]) {
    stints.sort_by(|a, b| {
        a.stint
            .driver_code
            .cmp(&b.stint.driver_code)
            .then(a.stint.stint_number.cmp(&b.stint.stint_number))
    });
}

/// Stable sort by one column. Stints without a value for a metric column
/// always end up after every stint that has one, in either direction.
pub fn sort_by_column(stints: &mut [ProcessedStint], column: StintColumn, direction: SortDirection) {
    stints.sort_by(|a, b| match column {
        StintColumn::Driver => direction.apply(a.stint.driver_code.cmp(&b.stint.driver_code)),
        StintColumn::Length => direction.apply(a.stint_length.cmp(&b.stint_length)),
        metric => compare_nulls_last(metric_value(a, metric), metric_value(b, metric), direction),
    });
}

fn metric_value(stint: &ProcessedStint, column: StintColumn) -> Option<f64> {
    match column {
        StintColumn::Fastest => stint.metrics.fastest_lap,
        StintColumn::Average => stint.metrics.avg_lap_time,
        StintColumn::Consistency => stint.metrics.consistency,
        StintColumn::Degradation => stint.metrics.degradation,
        StintColumn::Driver | StintColumn::Length => None,
    }
}

/// Compare optional metrics; `None` sorts after any value regardless of direction.
pub fn compare_nulls_last(a: Option<f64>, b: Option<f64>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => direction.apply(x.total_cmp(&y)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
