//! Structure-break setup evaluation
//!
//! Inspects the pivot structure of the most recent candles for trend
//! continuation: a higher low plus a higher high proposes a long entry, a
//! lower low plus a lower high proposes a short. Both directions are
//! evaluated independently each cycle. Too little structure in the window
//! is an expected outcome, not an error.

use serde::{Deserialize, Serialize};

use super::candles::Candle;
use super::pivots::{high_pivot_prices, low_pivot_prices, PivotLabel};

/// Trade direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Long,
    Short,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Long => write!(f, "LONG"),
            Self::Short => write!(f, "SHORT"),
        }
    }
}

/// A proposed trade, valid only for the cycle that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Setup {
    pub direction: Direction,
    pub entry: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
}

/// Parameters for setup evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetupConfig {
    /// Number of most recent candles to inspect for pivot structure.
    pub lookback: usize,
    /// Reward-to-risk multiple applied to the stop distance.
    pub reward_ratio: f64,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            lookback: 10,
            reward_ratio: 2.0,
        }
    }
}

/// The last two low-pivot and high-pivot prices within the lookback
/// window, in time order. `None` until the series holds a full lookback
/// window with at least two pivots of each kind.
fn recent_pivot_pairs(
    candles: &[Candle],
    labels: &[PivotLabel],
    lookback: usize,
) -> Option<((f64, f64), (f64, f64))> {
    if candles.len() < lookback {
        return None;
    }
    let start = candles.len() - lookback;
    let window = &candles[start..];
    let window_labels = labels.get(start..)?;

    let lows = low_pivot_prices(window, window_labels);
    let highs = high_pivot_prices(window, window_labels);
    if lows.len() < 2 || highs.len() < 2 {
        return None;
    }

    Some((
        (lows[lows.len() - 2], lows[lows.len() - 1]),
        (highs[highs.len() - 2], highs[highs.len() - 1]),
    ))
}

/// Propose a long on a higher low plus higher high. Entry is the latest
/// close, stop at the most recent low pivot, target at the configured
/// reward multiple of the stop distance.
pub fn check_bullish_setup(
    candles: &[Candle],
    labels: &[PivotLabel],
    config: &SetupConfig,
) -> Option<Setup> {
    let ((low1, low2), (high1, high2)) = recent_pivot_pairs(candles, labels, config.lookback)?;
    if low2 > low1 && high2 > high1 {
        let entry = candles.last()?.close;
        let stop_loss = low2;
        let take_profit = entry + (entry - stop_loss) * config.reward_ratio;
        return Some(Setup {
            direction: Direction::Long,
            entry,
            stop_loss,
            take_profit,
        });
    }
    None
}

/// Propose a short on a lower low plus lower high, mirrored from the
/// bullish case with the stop at the most recent high pivot.
pub fn check_bearish_setup(
    candles: &[Candle],
    labels: &[PivotLabel],
    config: &SetupConfig,
) -> Option<Setup> {
    let ((low1, low2), (high1, high2)) = recent_pivot_pairs(candles, labels, config.lookback)?;
    if low2 < low1 && high2 < high1 {
        let entry = candles.last()?.close;
        let stop_loss = high2;
        let take_profit = entry - (stop_loss - entry) * config.reward_ratio;
        return Some(Setup {
            direction: Direction::Short,
            entry,
            stop_loss,
            take_profit,
        });
    }
    None
}

/// Evaluate both directions independently. Pathological data may yield
/// two setups in the same cycle; that is legal.
pub fn check_setups(candles: &[Candle], labels: &[PivotLabel], config: &SetupConfig) -> Vec<Setup> {
    let mut setups = Vec::new();
    if let Some(setup) = check_bullish_setup(candles, labels, config) {
        setups.push(setup);
    }
    if let Some(setup) = check_bearish_setup(candles, labels, config) {
        setups.push(setup);
    }
    setups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn candle(i: usize, high: f64, low: f64, close: f64) -> Candle {
        Candle {
            timestamp: Utc.timestamp_opt(1_700_000_000 + i as i64 * 900, 0).unwrap(),
            open: close,
            high,
            low,
            close,
            volume: 10.0,
        }
    }

    /// Build a ten-candle window with hand-placed pivot labels. Pivot
    /// prices are carried on the candle the label points at.
    fn labeled_window(
        lows: &[(usize, f64)],
        highs: &[(usize, f64)],
        latest_close: f64,
    ) -> (Vec<Candle>, Vec<PivotLabel>) {
        let mut candles: Vec<Candle> = (0..10)
            .map(|i| candle(i, 1000.0, 0.0, latest_close))
            .collect();
        let mut labels = vec![PivotLabel::default(); 10];

        for &(i, price) in lows {
            candles[i].low = price;
            labels[i].low = true;
        }
        for &(i, price) in highs {
            candles[i].high = price;
            labels[i].high = true;
        }
        (candles, labels)
    }

    #[test]
    fn test_bullish_setup_higher_low_higher_high() {
        let (candles, labels) =
            labeled_window(&[(2, 10.0), (6, 12.0)], &[(4, 20.0), (8, 25.0)], 30.0);
        let setup = check_bullish_setup(&candles, &labels, &SetupConfig::default()).unwrap();

        assert_eq!(setup.direction, Direction::Long);
        assert_eq!(setup.entry, 30.0);
        assert_eq!(setup.stop_loss, 12.0);
        assert_eq!(setup.take_profit, 66.0); // 30 + (30 - 12) * 2

        assert!(check_bearish_setup(&candles, &labels, &SetupConfig::default()).is_none());
    }

    #[test]
    fn test_bearish_setup_lower_low_lower_high() {
        let (candles, labels) =
            labeled_window(&[(2, 12.0), (6, 10.0)], &[(4, 25.0), (8, 20.0)], 15.0);
        let setup = check_bearish_setup(&candles, &labels, &SetupConfig::default()).unwrap();

        assert_eq!(setup.direction, Direction::Short);
        assert_eq!(setup.entry, 15.0);
        assert_eq!(setup.stop_loss, 20.0);
        assert_eq!(setup.take_profit, 5.0); // 15 - (20 - 15) * 2

        assert!(check_bullish_setup(&candles, &labels, &SetupConfig::default()).is_none());
    }

    #[test]
    fn test_insufficient_pivots_yield_no_setup() {
        // one low pivot, two high pivots
        let (candles, labels) = labeled_window(&[(2, 10.0)], &[(4, 20.0), (8, 25.0)], 30.0);
        assert!(check_setups(&candles, &labels, &SetupConfig::default()).is_empty());

        // two lows, one high
        let (candles, labels) = labeled_window(&[(2, 10.0), (6, 12.0)], &[(4, 20.0)], 30.0);
        assert!(check_setups(&candles, &labels, &SetupConfig::default()).is_empty());
    }

    #[test]
    fn test_mixed_structure_yields_no_setup() {
        // lower low but higher high matches neither direction
        let (candles, labels) =
            labeled_window(&[(2, 12.0), (6, 10.0)], &[(4, 20.0), (8, 25.0)], 30.0);
        assert!(check_setups(&candles, &labels, &SetupConfig::default()).is_empty());
    }

    #[test]
    fn test_pivots_outside_lookback_are_ignored() {
        // 12 candles; the older low pivot falls outside the 10-candle
        // window, leaving only one low pivot inside it.
        let mut candles: Vec<Candle> = (0..12).map(|i| candle(i, 1000.0, 0.0, 30.0)).collect();
        let mut labels = vec![PivotLabel::default(); 12];
        candles[1].low = 10.0;
        labels[1].low = true;
        candles[6].low = 12.0;
        labels[6].low = true;
        for &(i, price) in &[(4usize, 20.0), (8usize, 25.0)] {
            candles[i].high = price;
            labels[i].high = true;
        }

        assert!(check_bullish_setup(&candles, &labels, &SetupConfig::default()).is_none());
    }

    #[test]
    fn test_fewer_than_lookback_candles_yield_no_setup() {
        let (mut candles, mut labels) =
            labeled_window(&[(2, 10.0), (6, 12.0)], &[(4, 20.0), (8, 25.0)], 30.0);
        candles.truncate(9);
        labels.truncate(9);
        assert!(check_setups(&candles, &labels, &SetupConfig::default()).is_empty());
    }
}
