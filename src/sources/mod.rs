//! Candle data sources
//!
//! The evaluation loop never talks to an exchange directly; it pulls
//! candles through the `CandleSource` capability. The synthetic source
//! stands in for live market data, the fixture source scripts
//! deterministic frames for tests.

use anyhow::Result;
use async_trait::async_trait;

use crate::trading_core::Candle;

pub mod fixture;
pub mod synthetic;

pub use fixture::FixtureCandleSource;
pub use synthetic::SyntheticCandleSource;

/// Provides recent market candles for a symbol.
#[async_trait]
pub trait CandleSource: Send + Sync {
    /// Fetch up to `limit` most recent candles, oldest first. Failure
    /// here is a data-unavailable condition the loop treats as a
    /// single-cycle error.
    async fn fetch_recent_candles(
        &self,
        symbol: &str,
        timeframe: &str,
        limit: usize,
    ) -> Result<Vec<Candle>>;
}
