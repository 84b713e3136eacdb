//! Synthetic candle generation
//!
//! Random-walk OHLCV generator used when no exchange feed is wired in.
//! Each bar opens at the previous close and moves by a normally
//! distributed return, with wicks extended beyond the body so every
//! candle satisfies the series invariant by construction.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal, Uniform};
use std::sync::Mutex;

use super::CandleSource;
use crate::trading_core::Candle;

/// Seedable random-walk candle source.
pub struct SyntheticCandleSource {
    base_price: f64,
    /// Per-bar return standard deviation, as a fraction of price.
    volatility: f64,
    rng: Mutex<StdRng>,
}

impl SyntheticCandleSource {
    pub fn new(base_price: f64, volatility: f64) -> Self {
        Self::with_rng(base_price, volatility, StdRng::from_entropy())
    }

    /// Fixed seed for reproducible runs.
    pub fn seeded(base_price: f64, volatility: f64, seed: u64) -> Self {
        Self::with_rng(base_price, volatility, StdRng::seed_from_u64(seed))
    }

    fn with_rng(base_price: f64, volatility: f64, rng: StdRng) -> Self {
        Self {
            base_price,
            volatility,
            rng: Mutex::new(rng),
        }
    }
}

/// Parse a timeframe like "15m" or "1h" into its bar length. Unknown
/// formats fall back to 15 minutes.
fn timeframe_duration(timeframe: &str) -> Duration {
    let (value, unit) = timeframe.split_at(timeframe.len().saturating_sub(1));
    let n: i64 = value.parse().unwrap_or(15);
    match unit {
        "s" => Duration::seconds(n),
        "h" => Duration::hours(n),
        "d" => Duration::days(n),
        _ => Duration::minutes(n),
    }
}

#[async_trait]
impl CandleSource for SyntheticCandleSource {
    async fn fetch_recent_candles(
        &self,
        _symbol: &str,
        timeframe: &str,
        limit: usize,
    ) -> Result<Vec<Candle>> {
        let step = timeframe_duration(timeframe);
        let end = Utc::now();

        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        let returns = Normal::new(0.0, self.volatility)?;
        let volume = Uniform::new(10.0, 100.0);

        let mut candles = Vec::with_capacity(limit);
        let mut price = self.base_price;
        for i in 0..limit {
            let open = price;
            let close = (open * (1.0 + returns.sample(&mut *rng))).max(open * 0.5);
            let body_high = open.max(close);
            let body_low = open.min(close);
            let wick = returns.sample(&mut *rng).abs();
            let high = body_high * (1.0 + wick);
            let low = (body_low * (1.0 - wick)).max(0.0);

            candles.push(Candle {
                timestamp: end - step * (limit - i) as i32,
                open,
                high,
                low,
                close,
                volume: rng.sample(volume),
            });
            price = close;
        }

        Ok(candles)
    }
}
