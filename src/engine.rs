// =============================================================================
// Indicator dispatch boundary
// =============================================================================
//
// The dashboard layer selects an indicator from config / request JSON once,
// resolved here into a typed variant with its own parameters, then hands the
// engine a bar slice and consumes the aligned output series. Every field
// carries a `#[serde(default)]` so a config entry can name just the
// indicator and inherit the conventional periods.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::indicators::{
    calculate_atr, calculate_bollinger_bands, calculate_ema, calculate_macd, calculate_rsi,
    calculate_sma, calculate_stochastic,
};
use crate::series::{Bar, BollingerBandsOutput, IndicatorPoint, MacdOutput};

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_ma_period() -> usize {
    20
}

fn default_oscillator_period() -> usize {
    14
}

fn default_fast_period() -> usize {
    12
}

fn default_slow_period() -> usize {
    26
}

fn default_signal_period() -> usize {
    9
}

fn default_std_dev_multiplier() -> f64 {
    2.0
}

fn default_smooth() -> usize {
    3
}

/// Which flavor of moving average to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovingAverageKind {
    Simple,
    Exponential,
}

/// An indicator selection with its typed parameters.
///
/// Periods are validated once at [`Indicator::compute`]; a zero period is a
/// programmer/config error and fails fast rather than producing garbage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "indicator", rename_all = "snake_case")]
pub enum Indicator {
    MovingAverage {
        kind: MovingAverageKind,
        #[serde(default = "default_ma_period")]
        period: usize,
    },
    Rsi {
        #[serde(default = "default_oscillator_period")]
        period: usize,
    },
    Macd {
        #[serde(default = "default_fast_period")]
        fast_period: usize,
        #[serde(default = "default_slow_period")]
        slow_period: usize,
        #[serde(default = "default_signal_period")]
        signal_period: usize,
    },
    BollingerBands {
        #[serde(default = "default_ma_period")]
        period: usize,
        #[serde(default = "default_std_dev_multiplier")]
        std_dev_multiplier: f64,
    },
    Stochastic {
        #[serde(default = "default_oscillator_period")]
        period: usize,
        /// Reserved: accepted for interface symmetry, not applied (the raw
        /// %K is emitted unsmoothed).
        #[serde(default = "default_smooth")]
        smooth_k: usize,
        /// Reserved, see `smooth_k`.
        #[serde(default = "default_smooth")]
        smooth_d: usize,
    },
    Atr {
        #[serde(default = "default_oscillator_period")]
        period: usize,
    },
}

/// The result of one indicator invocation: a single series, or a named
/// bundle of aligned series for the composite indicators.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorOutput {
    Series(Vec<IndicatorPoint>),
    Macd(MacdOutput),
    BollingerBands(BollingerBandsOutput),
}

impl IndicatorOutput {
    /// The single series, when this output is not a bundle.
    pub fn as_series(&self) -> Option<&[IndicatorPoint]> {
        match self {
            Self::Series(points) => Some(points),
            _ => None,
        }
    }
}

/// Error returned by [`Indicator::compute`].
///
/// Insufficient history is deliberately not an error: short input produces
/// empty output series, the normal state during initial chart load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IndicatorError {
    #[error("invalid {parameter} for {indicator}: periods must be >= 1")]
    InvalidParameter {
        indicator: &'static str,
        parameter: &'static str,
    },
}

impl Indicator {
    /// Stable name for logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MovingAverage {
                kind: MovingAverageKind::Simple,
                ..
            } => "sma",
            Self::MovingAverage {
                kind: MovingAverageKind::Exponential,
                ..
            } => "ema",
            Self::Rsi { .. } => "rsi",
            Self::Macd { .. } => "macd",
            Self::BollingerBands { .. } => "bollinger_bands",
            Self::Stochastic { .. } => "stochastic",
            Self::Atr { .. } => "atr",
        }
    }

    /// Reject zero periods before any calculation runs.
    ///
    /// Only applied parameters are checked; the reserved Stochastic smoothing
    /// fields never reach a calculation.
    fn validate(&self) -> Result<(), IndicatorError> {
        let invalid = |parameter| IndicatorError::InvalidParameter {
            indicator: self.name(),
            parameter,
        };

        match *self {
            Self::MovingAverage { period, .. }
            | Self::Rsi { period }
            | Self::BollingerBands { period, .. }
            | Self::Stochastic { period, .. }
            | Self::Atr { period } => {
                if period == 0 {
                    return Err(invalid("period"));
                }
            }
            Self::Macd {
                fast_period,
                slow_period,
                signal_period,
            } => {
                if fast_period == 0 {
                    return Err(invalid("fast_period"));
                }
                if slow_period == 0 {
                    return Err(invalid("slow_period"));
                }
                if signal_period == 0 {
                    return Err(invalid("signal_period"));
                }
            }
        }
        Ok(())
    }

    /// Run this indicator over `bars`, oldest first.
    ///
    /// Pure and stateless: the same input and parameters always produce the
    /// same output, and nothing is retained between calls.
    pub fn compute(&self, bars: &[Bar]) -> Result<IndicatorOutput, IndicatorError> {
        self.validate()?;
        debug!(indicator = self.name(), bars = bars.len(), "computing indicator");

        let output = match *self {
            Self::MovingAverage {
                kind: MovingAverageKind::Simple,
                period,
            } => IndicatorOutput::Series(calculate_sma(bars, period)),
            Self::MovingAverage {
                kind: MovingAverageKind::Exponential,
                period,
            } => IndicatorOutput::Series(calculate_ema(bars, period)),
            Self::Rsi { period } => IndicatorOutput::Series(calculate_rsi(bars, period)),
            Self::Macd {
                fast_period,
                slow_period,
                signal_period,
            } => IndicatorOutput::Macd(calculate_macd(
                bars,
                fast_period,
                slow_period,
                signal_period,
            )),
            Self::BollingerBands {
                period,
                std_dev_multiplier,
            } => IndicatorOutput::BollingerBands(calculate_bollinger_bands(
                bars,
                period,
                std_dev_multiplier,
            )),
            Self::Stochastic { period, .. } => {
                IndicatorOutput::Series(calculate_stochastic(bars, period))
            }
            Self::Atr { period } => IndicatorOutput::Series(calculate_atr(bars, period)),
        };

        Ok(output)
    }
}
