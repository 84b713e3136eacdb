//! OHLCV candle data model
//!
//! Candles arrive oldest-first from a `CandleSource` and are validated
//! into a `CandleSeries` before any strategy code sees them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single OHLCV bar. Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    /// Check the per-candle invariants: non-negative fields and
    /// `low <= open, close <= high`.
    pub fn validate(&self) -> Result<(), CandleError> {
        let fields = [self.open, self.high, self.low, self.close, self.volume];
        if fields.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(CandleError::NegativeField {
                timestamp: self.timestamp,
            });
        }
        let body_ok = self.low <= self.open
            && self.open <= self.high
            && self.low <= self.close
            && self.close <= self.high;
        if !body_ok {
            return Err(CandleError::InconsistentRange {
                timestamp: self.timestamp,
            });
        }
        Ok(())
    }
}

/// Validation failures for incoming candle data.
///
/// These surface as the "malformed candle data" case of the per-cycle
/// error taxonomy, never as a panic.
#[derive(Debug, Error)]
pub enum CandleError {
    #[error("candle at {timestamp} has a negative or non-finite field")]
    NegativeField { timestamp: DateTime<Utc> },

    #[error("candle at {timestamp} violates low <= open/close <= high")]
    InconsistentRange { timestamp: DateTime<Utc> },

    #[error("candle timestamps not strictly increasing at index {index}")]
    OutOfOrder { index: usize },
}

/// Ordered sequence of candles, oldest first, strictly increasing
/// timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandleSeries {
    candles: Vec<Candle>,
}

impl CandleSeries {
    /// Validate raw candles into a series.
    pub fn new(candles: Vec<Candle>) -> Result<Self, CandleError> {
        for candle in &candles {
            candle.validate()?;
        }
        for (index, pair) in candles.windows(2).enumerate() {
            if pair[1].timestamp <= pair[0].timestamp {
                return Err(CandleError::OutOfOrder { index: index + 1 });
            }
        }
        Ok(Self { candles })
    }

    pub fn as_slice(&self) -> &[Candle] {
        &self.candles
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    /// Most recent candle, if any.
    pub fn latest(&self) -> Option<&Candle> {
        self.candles.last()
    }

    /// Close of the most recent candle.
    pub fn latest_close(&self) -> Option<f64> {
        self.latest().map(|c| c.close)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn candle(minute: u32, open: f64, high: f64, low: f64, close: f64) -> Candle {
        Candle {
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 0, minute, 0).unwrap(),
            open,
            high,
            low,
            close,
            volume: 50.0,
        }
    }

    #[test]
    fn test_valid_series() {
        let series = CandleSeries::new(vec![
            candle(0, 100.0, 105.0, 99.0, 104.0),
            candle(15, 104.0, 106.0, 103.0, 105.0),
        ])
        .unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series.latest_close(), Some(105.0));
    }

    #[test]
    fn test_rejects_inconsistent_range() {
        // open above high
        let result = CandleSeries::new(vec![candle(0, 110.0, 105.0, 99.0, 104.0)]);
        assert!(matches!(result, Err(CandleError::InconsistentRange { .. })));

        // close below low
        let result = CandleSeries::new(vec![candle(0, 100.0, 105.0, 99.0, 98.0)]);
        assert!(matches!(result, Err(CandleError::InconsistentRange { .. })));
    }

    #[test]
    fn test_rejects_negative_field() {
        let result = CandleSeries::new(vec![candle(0, 100.0, 105.0, -1.0, 104.0)]);
        assert!(matches!(result, Err(CandleError::NegativeField { .. })));
    }

    #[test]
    fn test_rejects_out_of_order_timestamps() {
        let result = CandleSeries::new(vec![
            candle(15, 100.0, 105.0, 99.0, 104.0),
            candle(0, 104.0, 106.0, 103.0, 105.0),
        ]);
        assert!(matches!(result, Err(CandleError::OutOfOrder { index: 1 })));
    }

    #[test]
    fn test_empty_series_is_valid() {
        let series = CandleSeries::new(Vec::new()).unwrap();
        assert!(series.is_empty());
        assert_eq!(series.latest_close(), None);
    }
}
