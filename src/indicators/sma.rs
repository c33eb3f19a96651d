// =============================================================================
// Simple Moving Average (SMA)
// =============================================================================
//
// The unweighted mean of the last `period` closing prices, emitted once per
// bar from index `period - 1` onward. Also the middle band of the Bollinger
// calculation and the smoothing stage of ATR (via the shared primitive).

use crate::primitives::{close_points, sma_of_points};
use crate::series::{Bar, IndicatorPoint};

/// Compute the SMA series of closing prices for the given `period`.
///
/// Each output point carries the time of the bar that completed its window.
/// Returns an empty vector when `bars.len() < period`.
///
/// # Panics
///
/// Panics when `period == 0` (programmer error, not a data condition).
pub fn calculate_sma(bars: &[Bar], period: usize) -> Vec<IndicatorPoint> {
    assert!(period > 0, "SMA period must be positive");
    sma_of_points(&close_points(bars), period)
}
