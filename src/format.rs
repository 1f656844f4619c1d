//! Lap-time and trend formatting for tables and chart axes

/// Table form `M:SS.mmm`, rounded to the millisecond; missing or non-finite
/// times render as `N/A`.
///
/// ```rust
/// use slipstream::format::format_lap_time;
///
/// assert_eq!(format_lap_time(Some(65.123)), "1:05.123");
/// assert_eq!(format_lap_time(None), "N/A");
/// ```
pub fn format_lap_time(seconds: Option<f64>) -> String {
    match seconds {
        Some(total) if total.is_finite() => {
            let sign = if total < 0.0 { "-" } else { "" };
            let total_ms = (total.abs() * 1000.0).round() as u64;
            let minutes = total_ms / 60_000;
            let secs = (total_ms / 1000) % 60;
            let millis = total_ms % 1000;
            format!("{}{}:{:02}.{:03}", sign, minutes, secs, millis)
        }
        _ => "N/A".to_string(),
    }
}

/// Axis form `MM:SS.mmm`; non-finite or negative times render as `--:--.---`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "--:--.---".to_string();
    }
    let total_ms = (seconds * 1000.0).round() as u64;
    let minutes = total_ms / 60_000;
    let secs = (total_ms / 1000) % 60;
    let millis = total_ms % 1000;
    format!("{:02}:{:02}.{:03}", minutes, secs, millis)
}

/// Signed seconds-per-lap trend, e.g. `+0.120s/lap`.
pub fn format_degradation(slope: Option<f64>) -> String {
    match slope {
        Some(value) if !value.is_nan() => format!("{:+.3}s/lap", value),
        _ => "N/A".to_string(),
    }
}
