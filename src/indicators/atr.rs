// =============================================================================
// Average True Range (ATR)
// =============================================================================
//
// True Range for each bar from index 1:
//
//   TR = max(H - L, |H - prevClose|, |L - prevClose|)
//
// smoothed with a plain simple moving average of the last `period` TR values.
// This is deliberately not the Wilder-smoothed ATR: the charting collaborator
// was calibrated against the simple-average variant, so it is kept as-is.

use crate::primitives::sma_of_points;
use crate::series::{Bar, IndicatorPoint};

/// Compute the ATR series for the given `period` (conventionally 14).
///
/// True Range consumes one bar of history before the average consumes
/// `period` more, so the first point lands on the bar at index `period` and
/// the output length is `bars.len() - period`. Returns an empty vector when
/// `bars.len() < period + 1`.
///
/// # Panics
///
/// Panics when `period == 0`.
pub fn calculate_atr(bars: &[Bar], period: usize) -> Vec<IndicatorPoint> {
    assert!(period > 0, "ATR period must be positive");

    let mut true_ranges = Vec::with_capacity(bars.len().saturating_sub(1));
    for pair in bars.windows(2) {
        let prev_close = pair[0].close;
        let bar = &pair[1];

        let tr = (bar.high - bar.low)
            .max((bar.high - prev_close).abs())
            .max((bar.low - prev_close).abs());
        true_ranges.push(IndicatorPoint::new(bar.time, tr));
    }

    sma_of_points(&true_ranges, period)
}
