//! Swing pivot detection
//!
//! Labels local extrema over the candle series: a candle is a high pivot
//! when its high strictly exceeds both immediate neighbors' highs, and a
//! low pivot when its low is strictly below both neighbors' lows. The two
//! passes are independent, so a candle may carry both labels on
//! degenerate single-candle-range data.

use serde::{Deserialize, Serialize};

use super::candles::Candle;

/// Pivot flags for one candle. Default is no pivot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PivotLabel {
    pub high: bool,
    pub low: bool,
}

/// Label every candle in the series. Boundary candles are never pivots,
/// so series shorter than 3 candles yield no pivots at all.
pub fn label_pivots(candles: &[Candle]) -> Vec<PivotLabel> {
    let mut labels = vec![PivotLabel::default(); candles.len()];
    if candles.len() < 3 {
        return labels;
    }

    for i in 1..candles.len() - 1 {
        let prev = &candles[i - 1];
        let curr = &candles[i];
        let next = &candles[i + 1];

        labels[i].high = curr.high > prev.high && curr.high > next.high;
        labels[i].low = curr.low < prev.low && curr.low < next.low;
    }

    labels
}

/// Prices of high pivots, in time order.
pub fn high_pivot_prices(candles: &[Candle], labels: &[PivotLabel]) -> Vec<f64> {
    candles
        .iter()
        .zip(labels)
        .filter(|(_, label)| label.high)
        .map(|(candle, _)| candle.high)
        .collect()
}

/// Prices of low pivots, in time order.
pub fn low_pivot_prices(candles: &[Candle], labels: &[PivotLabel]) -> Vec<f64> {
    candles
        .iter()
        .zip(labels)
        .filter(|(_, label)| label.low)
        .map(|(candle, _)| candle.low)
        .collect()
}
