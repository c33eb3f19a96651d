// =============================================================================
// Bollinger Bands
// =============================================================================
//
// A volatility envelope around the SMA: the middle band is the `period` SMA
// of closes, and the upper/lower bands sit `multiplier` population standard
// deviations above and below it. All three series are index-aligned and of
// identical length.

use crate::indicators::calculate_sma;
use crate::series::{Bar, BollingerBandsOutput, IndicatorPoint};

/// Compute Bollinger Bands for the given `period` and deviation `multiplier`
/// (conventionally 20 and 2.0).
///
/// The deviation is the population standard deviation (squared deviations
/// divided by `period`) of the window ending at each middle-band point.
/// Returns empty bands when `bars.len() < period`.
///
/// # Panics
///
/// Panics when `period == 0`.
pub fn calculate_bollinger_bands(
    bars: &[Bar],
    period: usize,
    multiplier: f64,
) -> BollingerBandsOutput {
    assert!(period > 0, "Bollinger period must be positive");

    let middle = calculate_sma(bars, period);
    let mut upper = Vec::with_capacity(middle.len());
    let mut lower = Vec::with_capacity(middle.len());

    // middle[i] averages the window bars[i..i + period].
    for (window, mid) in bars.windows(period).zip(&middle) {
        let sum_sq: f64 = window.iter().map(|b| (b.close - mid.value).powi(2)).sum();
        let std_dev = (sum_sq / period as f64).sqrt();

        upper.push(IndicatorPoint::new(mid.time, mid.value + multiplier * std_dev));
        lower.push(IndicatorPoint::new(mid.time, mid.value - multiplier * std_dev));
    }

    BollingerBandsOutput {
        upper,
        middle,
        lower,
    }
}
