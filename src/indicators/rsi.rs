// =============================================================================
// Relative Strength Index (RSI) — Wilder's Smoothing
// =============================================================================
//
// Step 1 — Seed average gain / average loss with the mean of the first
//          `period` bar-to-bar close deltas.
// Step 2 — Apply Wilder's smoothing per subsequent bar:
//            avg_gain = (avg_gain * (period - 1) + gain) / period
//            avg_loss = (avg_loss * (period - 1) + loss) / period
// Step 3 — RSI = 100 - 100 / (1 + avg_gain / avg_loss)
//
// The division is emitted as-is: with zero average loss and positive gains
// the ratio is +inf and the RSI is exactly 100; with no movement at all it
// is NaN. The chart layer decides how to render non-finite points.

use crate::series::{Bar, IndicatorPoint};

/// Compute the RSI series for the given `period` (conventionally 14).
///
/// The first point lands on the bar at index `period` (one full delta window
/// after the start); output length is `bars.len() - period`. Returns an empty
/// vector when `bars.len() < period + 1`.
///
/// # Panics
///
/// Panics when `period == 0`.
pub fn calculate_rsi(bars: &[Bar], period: usize) -> Vec<IndicatorPoint> {
    assert!(period > 0, "RSI period must be positive");
    if bars.len() < period + 1 {
        return Vec::new();
    }

    // --- Seed averages from the first `period` deltas ------------------------
    let mut gains = 0.0;
    let mut losses = 0.0;
    for pair in bars[..=period].windows(2) {
        let change = pair[1].close - pair[0].close;
        if change >= 0.0 {
            gains += change;
        } else {
            losses -= change;
        }
    }

    let period_f = period as f64;
    let mut avg_gain = gains / period_f;
    let mut avg_loss = losses / period_f;

    let mut result = Vec::with_capacity(bars.len() - period);
    result.push(IndicatorPoint::new(
        bars[period].time,
        rsi_value(avg_gain, avg_loss),
    ));

    // --- Wilder's smoothing for the remaining bars ----------------------------
    for pair in bars[period..].windows(2) {
        let change = pair[1].close - pair[0].close;
        let gain = change.max(0.0);
        let loss = (-change).max(0.0);

        avg_gain = (avg_gain * (period_f - 1.0) + gain) / period_f;
        avg_loss = (avg_loss * (period_f - 1.0) + loss) / period_f;

        result.push(IndicatorPoint::new(
            pair[1].time,
            rsi_value(avg_gain, avg_loss),
        ));
    }

    result
}

/// The raw IEEE-754 RSI of a gain/loss average pair, non-finite cases included.
fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
}
