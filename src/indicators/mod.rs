// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free series transforms over an ordered OHLCV bar slice.
// Every function returns a full output series aligned to a suffix of the
// input's time labels; insufficient history yields an empty series rather
// than an error, so callers can treat "not enough bars yet" as a normal
// state during initial chart load.

pub mod atr;
pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;
pub mod stochastic;

#[cfg(test)]
pub(crate) mod test_support;

pub use atr::calculate_atr;
pub use bollinger::calculate_bollinger_bands;
pub use ema::calculate_ema;
pub use macd::calculate_macd;
pub use rsi::calculate_rsi;
pub use sma::calculate_sma;
pub use stochastic::calculate_stochastic;
