// Shared builders for the indicator unit tests. Times are one-minute spaced
// from a fixed epoch; the algorithms only ever copy them.

use crate::series::Bar;

pub(crate) const BASE_TIME: i64 = 1_700_000_000;

/// Build a bar at sequence index `i` with explicit OHLC values.
pub(crate) fn bar(i: usize, open: f64, high: f64, low: f64, close: f64) -> Bar {
    Bar {
        time: BASE_TIME + i as i64 * 60,
        open,
        high,
        low,
        close,
        volume: 100.0,
    }
}

/// Build a series from closing prices alone; open/high/low track the close.
pub(crate) fn bars_from_closes(closes: &[f64]) -> Vec<Bar> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &c)| bar(i, c, c, c, c))
        .collect()
}
