// =============================================================================
// Tidemark — Technical Indicator Engine
// =============================================================================
//
// A pure, stateless indicator library for OHLCV candle series: the market
// dashboard fetches bars and renders charts, this crate only transforms an
// ordered bar slice into time-aligned derived series (SMA, EMA, RSI, MACD,
// Bollinger Bands, Stochastic %K, ATR).
//
// Contract with the caller:
// - input bars are oldest-first with strictly increasing time labels; the
//   engine neither sorts nor deduplicates;
// - every output series matches a suffix of the input's time labels, one
//   point per bar once the indicator's warmup window is filled;
// - insufficient history yields an empty series, never an error;
// - non-finite intermediate values (zero-loss RSI windows, flat Stochastic
//   ranges) propagate as IEEE-754 results for the chart layer to handle.

pub mod engine;
pub mod indicators;
mod primitives;
pub mod series;

pub use engine::{Indicator, IndicatorError, IndicatorOutput, MovingAverageKind};
pub use indicators::{
    calculate_atr, calculate_bollinger_bands, calculate_ema, calculate_macd, calculate_rsi,
    calculate_sma, calculate_stochastic,
};
pub use series::{
    Bar, BollingerBandsOutput, HistogramColor, HistogramPoint, IndicatorPoint, MacdOutput,
};
