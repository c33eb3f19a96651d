// =============================================================================
// Windowed-average primitives
// =============================================================================
//
// Every indicator that averages something routes through these two helpers so
// the summation and seeding behavior is identical everywhere it is reused.
// A "simple first-value" EMA seed here would silently skew the MACD signal
// line away from the price EMAs, so the SMA seed is load-bearing.

use crate::series::{Bar, IndicatorPoint};

/// Project a bar series onto its closing prices, keeping each bar's time.
pub(crate) fn close_points(bars: &[Bar]) -> Vec<IndicatorPoint> {
    bars.iter()
        .map(|bar| IndicatorPoint::new(bar.time, bar.close))
        .collect()
}

/// Simple moving average over raw `(time, value)` samples.
///
/// Each window is summed independently in ascending index order rather than
/// carried as a rolling sum, keeping the result reproducible bit-for-bit for
/// a given input. Returns an empty vector when `points.len() < period`.
pub(crate) fn sma_of_points(points: &[IndicatorPoint], period: usize) -> Vec<IndicatorPoint> {
    if points.len() < period {
        return Vec::new();
    }

    let mut result = Vec::with_capacity(points.len() - period + 1);
    for i in (period - 1)..points.len() {
        let sum: f64 = points[i + 1 - period..=i].iter().map(|p| p.value).sum();
        result.push(IndicatorPoint::new(points[i].time, sum / period as f64));
    }
    result
}

/// Exponential moving average over raw samples.
///
/// The first output is the SMA of the first `period` values; every subsequent
/// output is `value * k + prev * (1 - k)` with `k = 2 / (period + 1)`.
/// Returns an empty vector when `points.len() < period`.
pub(crate) fn ema_of_points(points: &[IndicatorPoint], period: usize) -> Vec<IndicatorPoint> {
    if points.len() < period {
        return Vec::new();
    }

    let k = 2.0 / (period + 1) as f64;
    let seed = points[..period].iter().map(|p| p.value).sum::<f64>() / period as f64;

    let mut result = Vec::with_capacity(points.len() - period + 1);
    result.push(IndicatorPoint::new(points[period - 1].time, seed));

    let mut ema = seed;
    for point in &points[period..] {
        ema = point.value * k + ema * (1.0 - k);
        result.push(IndicatorPoint::new(point.time, ema));
    }
    result
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: wrap raw values with sequential times starting at 0.
    fn points(values: &[f64]) -> Vec<IndicatorPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| IndicatorPoint::new(i as i64, v))
            .collect()
    }

    // ---- sma_of_points ---------------------------------------------------

    #[test]
    fn sma_insufficient_data() {
        assert!(sma_of_points(&points(&[1.0, 2.0]), 3).is_empty());
    }

    #[test]
    fn sma_window_means_and_times() {
        let sma = sma_of_points(&points(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3);
        assert_eq!(sma.len(), 3);
        let expected = [(2, 2.0), (3, 3.0), (4, 4.0)];
        for (point, (time, value)) in sma.iter().zip(expected) {
            assert_eq!(point.time, time);
            assert!((point.value - value).abs() < 1e-12);
        }
    }

    #[test]
    fn sma_exact_window() {
        let sma = sma_of_points(&points(&[2.0, 4.0, 6.0]), 3);
        assert_eq!(sma.len(), 1);
        assert!((sma[0].value - 4.0).abs() < 1e-12);
        assert_eq!(sma[0].time, 2);
    }

    // ---- ema_of_points ---------------------------------------------------

    #[test]
    fn ema_insufficient_data() {
        assert!(ema_of_points(&points(&[1.0, 2.0]), 3).is_empty());
    }

    #[test]
    fn ema_sma_seed() {
        // First EMA output must equal the SMA over the same initial window.
        let data = points(&[10.0, 11.0, 12.0, 13.0, 14.0, 15.0]);
        let ema = ema_of_points(&data, 4);
        let sma = sma_of_points(&data[..4], 4);
        assert_eq!(ema[0].time, sma[0].time);
        assert!((ema[0].value - sma[0].value).abs() < 1e-12);
    }

    #[test]
    fn ema_known_values() {
        // period=3 over [1..5]: seed = 2.0, k = 0.5 => [2.0, 3.0, 4.0]
        let ema = ema_of_points(&points(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3);
        assert_eq!(ema.len(), 3);
        let expected = [(2, 2.0), (3, 3.0), (4, 4.0)];
        for (point, (time, value)) in ema.iter().zip(expected) {
            assert_eq!(point.time, time);
            assert!((point.value - value).abs() < 1e-12, "got {}", point.value);
        }
    }

    #[test]
    fn ema_propagates_nan() {
        // A NaN input poisons the running accumulator from that index on.
        let ema = ema_of_points(&points(&[1.0, 2.0, 3.0, f64::NAN, 5.0]), 3);
        assert_eq!(ema.len(), 3);
        assert!(ema[0].value.is_finite());
        assert!(ema[1].value.is_nan());
        assert!(ema[2].value.is_nan());
    }
}
