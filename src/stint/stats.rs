//! Numeric helpers for lap-time statistics

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation, `None` for fewer than two values.
pub fn population_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = mean(values)?;
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    Some(variance.sqrt())
}

/// Ordinary least-squares slope of `y` on `x`.
///
/// `None` for fewer than two points. When every `x` is identical the
/// denominator is zero and the slope is reported as `0.0`.
pub fn least_squares_slope<I>(points: I) -> Option<f64>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let (n, sum_x, sum_y, sum_xy, sum_xx) = points.into_iter().fold(
        (0usize, 0.0, 0.0, 0.0, 0.0),
        |(n, sum_x, sum_y, sum_xy, sum_xx), (x, y)| {
            (n + 1, sum_x + x, sum_y + y, sum_xy + x * y, sum_xx + x * x)
        },
    );

    if n < 2 {
        return None;
    }

    let n = n as f64;
    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator == 0.0 {
        return Some(0.0);
    }

    Some((n * sum_xy - sum_x * sum_y) / denominator)
}
