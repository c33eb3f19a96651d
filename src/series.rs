// =============================================================================
// Shared series types used across the indicator engine
// =============================================================================
//
// Time is an opaque, orderable label: the collaborator that feeds bars encodes
// it as seconds since epoch, and the engine only ever copies it from an input
// bar into the output points derived from that bar. Nothing here assumes a
// uniform bar spacing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single OHLCV candle, oldest-first within a series.
///
/// Well-formed input satisfies `low <= open, close <= high` and a strictly
/// increasing `time` across the series; the engine does not enforce either.
/// Malformed input yields correspondingly malformed but deterministic output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default)]
    pub volume: f64,
}

impl Bar {
    /// The bar's time label as a UTC datetime, for logging and display.
    ///
    /// Returns `None` when the label is outside chrono's representable range.
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.time, 0)
    }
}

/// One output sample of an indicator: the time of the source bar whose data
/// completed the calculation, and the derived value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorPoint {
    pub time: i64,
    pub value: f64,
}

impl IndicatorPoint {
    pub fn new(time: i64, value: f64) -> Self {
        Self { time, value }
    }

    /// The point's time label as a UTC datetime, for logging and display.
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.time, 0)
    }
}

/// Presentation tint for a MACD histogram bar.
///
/// Carries no computational meaning; the chart layer maps it to its palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistogramColor {
    Positive,
    Negative,
}

impl HistogramColor {
    /// Hex color used by the reference chart layer.
    pub fn hex(&self) -> &'static str {
        match self {
            Self::Positive => "#26a69a",
            Self::Negative => "#ef5350",
        }
    }
}

/// A MACD histogram sample: an [`IndicatorPoint`] plus its presentation tint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramPoint {
    pub time: i64,
    pub value: f64,
    pub color: HistogramColor,
}

/// The three series produced by a MACD calculation.
///
/// `signal_line` and `histogram` are shorter than `macd_line` by
/// `signal_period - 1` entries; `histogram` shares `macd_line`'s time labels
/// index-for-index over its length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacdOutput {
    pub macd_line: Vec<IndicatorPoint>,
    pub signal_line: Vec<IndicatorPoint>,
    pub histogram: Vec<HistogramPoint>,
}

/// The three bands of a Bollinger Band calculation, index-aligned and of
/// identical length: a consumer may zip them without re-matching by time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BollingerBandsOutput {
    pub upper: Vec<IndicatorPoint>,
    pub middle: Vec<IndicatorPoint>,
    pub lower: Vec<IndicatorPoint>,
}
