//! Stint table pipeline: decode, derive metrics, sort, render

use slipstream::format::{format_degradation, format_lap_time};
use slipstream::palette::compound_color;
use slipstream::schema::{decode_lap_positions, decode_stints};
use slipstream::stint::{SortDirection, StintColumn, sort_by_column, sort_default};
use slipstream::{
    AnalyticsError, LapDetail, ProcessedStint, Trend, fastest_lap, key_moments, process_stints,
};

const PAYLOAD: &str = r#"[
    { "driverCode": "VER", "stintNumber": 2, "compound": "HARD", "startLap": 19, "endLap": 23,
      "lapDetails": [
        { "lapNumber": 19, "lapTime": 95.0 },
        { "lapNumber": 20, "lapTime": 88.9 },
        { "lapNumber": 21, "lapTime": 88.7 },
        { "lapNumber": 22, "lapTime": 88.5 },
        { "lapNumber": 23, "lapTime": 92.3 }
      ] },
    { "driverCode": "HAM", "stintNumber": 1, "compound": "MEDIUM", "startLap": 1, "endLap": 2,
      "lapDetails": [
        { "lapNumber": 1, "lapTime": 97.1 },
        { "lapNumber": 2, "lapTime": 90.4 }
      ] },
    { "driverCode": "VER", "stintNumber": 1, "compound": "MEDIUM", "startLap": 1, "endLap": 18,
      "lapDetails": [
        { "lapNumber": 1, "lapTime": 96.0 },
        { "lapNumber": 2, "lapTime": 89.0 },
        { "lapNumber": 3, "lapTime": 89.0 },
        { "lapNumber": 4, "lapTime": 89.0 },
        { "lapNumber": 18, "lapTime": 93.0 }
      ] },
    { "driverCode": "ALB", "stintNumber": 1, "compound": "INTERMEDIATE", "startLap": 1, "endLap": 30,
      "lapDetails": [
        { "lapNumber": 1, "lapTime": 99.0 },
        { "lapNumber": 2, "lapTime": 91.0 },
        { "lapNumber": 3, "lapTime": 91.4 },
        { "lapNumber": 4, "lapTime": 91.8 },
        { "lapNumber": 5, "lapTime": 94.0 }
      ] }
]"#;

fn table() -> Vec<ProcessedStint> {
    process_stints(decode_stints(PAYLOAD).unwrap())
}

fn ids(rows: &[ProcessedStint]) -> Vec<&str> {
    rows.iter().map(|r| r.id.as_str()).collect()
}

#[test]
fn default_order_is_driver_then_stint() {
    let rows = table();
    assert_eq!(ids(&rows), vec!["ALB-1", "HAM-1", "VER-1", "VER-2"]);
}

#[test]
fn degradation_sign_example() {
    let rows = table();
    let ver_2 = rows.iter().find(|r| r.id == "VER-2").unwrap();

    assert_eq!(ver_2.metrics.fastest_lap, Some(88.5));
    assert!((ver_2.metrics.avg_lap_time.unwrap() - 88.7).abs() < 1e-9);
    assert!((ver_2.metrics.degradation.unwrap() + 0.2).abs() < 1e-9);
    assert_eq!(ver_2.metrics.trend(), Some(Trend::Improving));
    assert_eq!(format_degradation(ver_2.metrics.degradation), "-0.200s/lap");
}

#[test]
fn identical_laps_have_zero_consistency() {
    let rows = table();
    let ver_1 = rows.iter().find(|r| r.id == "VER-1").unwrap();

    assert_eq!(ver_1.metrics.consistency, Some(0.0));
    assert_eq!(ver_1.metrics.degradation, Some(0.0));
    assert_eq!(ver_1.stint_length, 18);
}

#[test]
fn two_lap_stint_only_has_fastest_lap() {
    let rows = table();
    let ham = rows.iter().find(|r| r.id == "HAM-1").unwrap();

    assert_eq!(ham.metrics.fastest_lap, Some(90.4));
    assert_eq!(ham.metrics.avg_lap_time, None);
    assert_eq!(ham.metrics.consistency, None);
    assert_eq!(ham.metrics.degradation, None);
    assert_eq!(ham.metrics.trend(), None);
    assert_eq!(format_lap_time(ham.metrics.avg_lap_time), "N/A");
}

#[test]
fn metric_sorts_put_missing_values_last_both_ways() {
    let mut rows = table();

    sort_by_column(&mut rows, StintColumn::Degradation, SortDirection::Ascending);
    assert_eq!(ids(&rows), vec!["VER-2", "VER-1", "ALB-1", "HAM-1"]);

    sort_by_column(&mut rows, StintColumn::Degradation, SortDirection::Descending);
    assert_eq!(ids(&rows), vec!["ALB-1", "VER-1", "VER-2", "HAM-1"]);

    sort_default(&mut rows);
    assert_eq!(ids(&rows), vec!["ALB-1", "HAM-1", "VER-1", "VER-2"]);
}

#[test]
fn column_names_parse_from_table_headers() {
    let column: StintColumn = "avgLapTime".parse().unwrap();
    assert_eq!(column, StintColumn::Average);
    assert!(matches!(
        "pitStops".parse::<StintColumn>(),
        Err(AnalyticsError::UnknownColumn { .. })
    ));
}

#[test]
fn rows_render_for_display() {
    let rows = table();
    let rendered: Vec<(String, &str, String)> = rows
        .iter()
        .map(|r| {
            (
                r.id.clone(),
                compound_color(Some(r.stint.compound.as_str())),
                format_lap_time(r.metrics.fastest_lap),
            )
        })
        .collect();

    assert_eq!(rendered[0], ("ALB-1".to_string(), "#22C55E", "1:31.000".to_string()));
    assert_eq!(rendered[3], ("VER-2".to_string(), "#FFFFFF", "1:28.500".to_string()));
}

#[test]
fn processed_stints_serialize_flat() {
    let rows = table();
    let json = serde_json::to_value(&rows[1]).unwrap();

    assert_eq!(json["id"], "HAM-1");
    assert_eq!(json["driverCode"], "HAM");
    assert_eq!(json["stintLength"], 2);
    assert_eq!(json["fastestLap"], 90.4);
    assert!(json["avgLapTime"].is_null());
}

#[test]
fn key_moments_from_position_payload() {
    let positions = decode_lap_positions(
        r#"[
            {"LapNumber": 1, "LEC": 1, "PIA": 2, "SAI": 3, "NOR": 4, "HAM": 7},
            {"LapNumber": 2, "LEC": 1, "PIA": 2, "SAI": 6, "NOR": 3, "HAM": 4},
            {"LapNumber": 3, "LEC": 1, "PIA": 2, "SAI": 5, "NOR": 3, "HAM": null}
        ]"#,
    )
    .unwrap();
    let moments = key_moments(&positions);

    let gain = moments.biggest_gain.unwrap();
    assert_eq!((gain.driver_code.as_str(), gain.lap_number, gain.from, gain.to), ("HAM", 2, 7, 4));
    let loss = moments.biggest_loss.unwrap();
    assert_eq!((loss.driver_code.as_str(), loss.places()), ("SAI", -3));
}

#[test]
fn fastest_lap_of_lap_table_renders() {
    let table = [LapDetail::new(1, 0.0), LapDetail::new(2, 75.912), LapDetail::new(3, 74.165)];
    let fastest = fastest_lap(&table).unwrap();

    assert_eq!(fastest.lap_number, 3);
    assert_eq!(format_lap_time(Some(fastest.lap_time)), "1:14.165");
}
