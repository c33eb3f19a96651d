// =============================================================================
// Stochastic Oscillator (%K)
// =============================================================================
//
//   %K = (close - lowest low) / (highest high - lowest low) * 100
//
// over the trailing `period` bars, each window scanned independently. The
// raw %K is emitted with no additional %K/%D smoothing; a flat window makes
// the denominator zero and the resulting non-finite value propagates as-is.

use crate::series::{Bar, IndicatorPoint};

/// Compute the raw %K series for the given `period` (conventionally 14).
///
/// Returns an empty vector when `bars.len() < period`.
///
/// # Panics
///
/// Panics when `period == 0`.
pub fn calculate_stochastic(bars: &[Bar], period: usize) -> Vec<IndicatorPoint> {
    assert!(period > 0, "Stochastic period must be positive");
    if bars.len() < period {
        return Vec::new();
    }

    let mut result = Vec::with_capacity(bars.len() - period + 1);
    for i in (period - 1)..bars.len() {
        let mut highest = bars[i].high;
        let mut lowest = bars[i].low;
        for bar in &bars[i + 1 - period..=i] {
            if bar.high > highest {
                highest = bar.high;
            }
            if bar.low < lowest {
                lowest = bar.low;
            }
        }

        let k = (bars[i].close - lowest) / (highest - lowest) * 100.0;
        result.push(IndicatorPoint::new(bars[i].time, k));
    }

    result
}
