// =============================================================================
// Exponential Moving Average (EMA)
// =============================================================================
//
// EMA weights recent prices more heavily than the SMA:
//
//   k     = 2 / (period + 1)
//   EMA_t = close_t * k + EMA_{t-1} * (1 - k)
//
// The first output is seeded with the SMA of the first `period` closes, which
// keeps it aligned with the standalone SMA and with the MACD construction.

use crate::primitives::{close_points, ema_of_points};
use crate::series::{Bar, IndicatorPoint};

/// Compute the EMA series of closing prices for the given `period`.
///
/// The first point lands on the bar at index `period - 1` and equals the SMA
/// of the first `period` closes. Returns an empty vector when
/// `bars.len() < period`.
///
/// # Panics
///
/// Panics when `period == 0`.
pub fn calculate_ema(bars: &[Bar], period: usize) -> Vec<IndicatorPoint> {
    assert!(period > 0, "EMA period must be positive");
    ema_of_points(&close_points(bars), period)
}
