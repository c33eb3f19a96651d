// =============================================================================
// Moving Average Convergence Divergence (MACD)
// =============================================================================
//
//   macd line = EMA(fast) - EMA(slow)
//   signal    = EMA of the macd line itself (signal_period)
//   histogram = macd line - signal line, tinted by sign
//
// The slow EMA starts later than the fast one, so the macd line is truncated
// to the slow series' length by index pairing; both EMAs come from the same
// bar sequence through the same seeding, so the pairing is stable. The signal
// line and histogram are in turn shorter than the macd line by
// `signal_period - 1`.

use crate::indicators::calculate_ema;
use crate::primitives::ema_of_points;
use crate::series::{Bar, HistogramColor, HistogramPoint, IndicatorPoint, MacdOutput};

/// Compute the MACD bundle for the given periods (conventionally 12/26/9).
///
/// Returns empty series all around when there are fewer than `slow_period`
/// bars; the signal line and histogram additionally need `signal_period`
/// macd-line points before they produce anything.
///
/// # Panics
///
/// Panics when any period is zero.
pub fn calculate_macd(
    bars: &[Bar],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> MacdOutput {
    assert!(
        fast_period > 0 && slow_period > 0 && signal_period > 0,
        "MACD periods must be positive"
    );

    let ema_fast = calculate_ema(bars, fast_period);
    let ema_slow = calculate_ema(bars, slow_period);

    let len = ema_fast.len().min(ema_slow.len());
    let mut macd_line = Vec::with_capacity(len);
    for (fast, slow) in ema_fast[..len].iter().zip(&ema_slow[..len]) {
        macd_line.push(IndicatorPoint::new(fast.time, fast.value - slow.value));
    }

    let signal_line = ema_of_points(&macd_line, signal_period);

    let len = macd_line.len().min(signal_line.len());
    let mut histogram = Vec::with_capacity(len);
    for (macd, signal) in macd_line[..len].iter().zip(&signal_line[..len]) {
        let value = macd.value - signal.value;
        let color = if value >= 0.0 {
            HistogramColor::Positive
        } else {
            HistogramColor::Negative
        };
        histogram.push(HistogramPoint {
            time: macd.time,
            value,
            color,
        });
    }

    MacdOutput {
        macd_line,
        signal_line,
        histogram,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::test_support::bars_from_closes;

    fn wavy_closes(n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| 100.0 + (i as f64 * 0.35).sin() * 8.0 + i as f64 * 0.05)
            .collect()
    }

    #[test]
    fn macd_insufficient_data_is_all_empty() {
        let bars = bars_from_closes(&wavy_closes(20)); // < slow_period
        let macd = calculate_macd(&bars, 12, 26, 9);
        assert!(macd.macd_line.is_empty());
        assert!(macd.signal_line.is_empty());
        assert!(macd.histogram.is_empty());
    }

    #[test]
    #[should_panic(expected = "periods must be positive")]
    fn macd_period_zero_panics() {
        let bars = bars_from_closes(&wavy_closes(60));
        calculate_macd(&bars, 12, 26, 0);
    }

    #[test]
    fn macd_lengths() {
        let bars = bars_from_closes(&wavy_closes(90));
        let macd = calculate_macd(&bars, 12, 26, 9);
        // macd line is truncated to the slow EMA: 90 - 26 + 1 points.
        assert_eq!(macd.macd_line.len(), 90 - 26 + 1);
        assert_eq!(macd.signal_line.len(), macd.macd_line.len() - (9 - 1));
        assert_eq!(macd.histogram.len(), macd.signal_line.len());
    }

    #[test]
    fn macd_histogram_shares_macd_line_times() {
        let bars = bars_from_closes(&wavy_closes(90));
        let macd = calculate_macd(&bars, 12, 26, 9);
        for (hist, line) in macd.histogram.iter().zip(&macd.macd_line) {
            assert_eq!(hist.time, line.time);
        }
    }

    #[test]
    fn macd_histogram_values_and_colors() {
        let bars = bars_from_closes(&wavy_closes(90));
        let macd = calculate_macd(&bars, 12, 26, 9);
        let mut saw_positive = false;
        let mut saw_negative = false;
        for (i, hist) in macd.histogram.iter().enumerate() {
            let expected = macd.macd_line[i].value - macd.signal_line[i].value;
            assert!((hist.value - expected).abs() < 1e-12);
            match hist.color {
                HistogramColor::Positive => {
                    assert!(hist.value >= 0.0);
                    saw_positive = true;
                }
                HistogramColor::Negative => {
                    assert!(hist.value < 0.0);
                    saw_negative = true;
                }
            }
        }
        assert!(saw_positive && saw_negative, "wavy input should cross zero");
    }

    #[test]
    fn macd_line_is_fast_minus_slow() {
        let bars = bars_from_closes(&wavy_closes(90));
        let macd = calculate_macd(&bars, 12, 26, 9);
        let ema_fast = calculate_ema(&bars, 12);
        let ema_slow = calculate_ema(&bars, 26);
        for (i, point) in macd.macd_line.iter().enumerate() {
            assert_eq!(point.time, ema_fast[i].time);
            let expected = ema_fast[i].value - ema_slow[i].value;
            assert!((point.value - expected).abs() < 1e-12);
        }
    }
}
