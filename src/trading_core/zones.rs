//! Support/resistance zone extraction
//!
//! Derives price levels from windowed extrema: a candle whose high equals
//! the max high over the `2*sensitivity + 1` window centered on it marks
//! resistance; otherwise, a candle whose low equals the window's min low
//! marks support. Resistance takes precedence when a single candle is
//! both (flat data). Zones are descriptive output only; nothing
//! downstream gates on them.

use serde::{Deserialize, Serialize};

use super::candles::Candle;

pub const DEFAULT_SENSITIVITY: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneKind {
    Support,
    Resistance,
}

/// A support or resistance price level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub kind: ZoneKind,
    pub price: f64,
}

/// Extract zones over the series. Candles within `sensitivity` of either
/// end have no full window and never produce a zone; a series shorter
/// than `2*sensitivity + 1` produces none at all. Adjacent candles may
/// repeat the same price; duplicates are kept.
pub fn detect_zones(candles: &[Candle], sensitivity: usize) -> Vec<Zone> {
    let mut zones = Vec::new();
    if sensitivity == 0 || candles.len() < 2 * sensitivity + 1 {
        return zones;
    }

    for i in sensitivity..candles.len() - sensitivity {
        let window = &candles[i - sensitivity..=i + sensitivity];
        let max_high = window.iter().map(|c| c.high).fold(f64::MIN, f64::max);
        let min_low = window.iter().map(|c| c.low).fold(f64::MAX, f64::min);

        // The candle's own high is part of the window, so equality means
        // it is the (possibly tied) window extremum.
        if candles[i].high == max_high {
            zones.push(Zone {
                kind: ZoneKind::Resistance,
                price: candles[i].high,
            });
        } else if candles[i].low == min_low {
            zones.push(Zone {
                kind: ZoneKind::Support,
                price: candles[i].low,
            });
        }
    }

    zones
}
