//! One evaluation cycle
//!
//! Fetch, validate, label, extract zones, evaluate both setup directions,
//! size and emit. Expected "no structure" outcomes flow through as empty
//! results; only data problems surface as a `CycleError`, which the
//! runner logs and survives.

use thiserror::Error;
use tracing::debug;

use super::config::BotConfig;
use super::state::LogSink;
use crate::execution::{TradeNotification, TradeSink};
use crate::sources::CandleSource;
use crate::trading_core::{
    check_setups, detect_zones, label_pivots, position_size, CandleError, CandleSeries,
};

/// Per-cycle failure, matched by the runner to decide
/// continue-vs-terminate.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error("candle data unavailable: {0}")]
    DataUnavailable(anyhow::Error),

    #[error("malformed candle data: {0}")]
    MalformedData(#[from] CandleError),
}

impl CycleError {
    /// Whether the loop should keep cycling after this error. Every
    /// current kind is a single-cycle fault; only the balance guard
    /// terminates the loop.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::DataUnavailable(_) | Self::MalformedData(_) => true,
        }
    }
}

/// What a completed cycle produced, for the runner's debug line.
#[derive(Debug)]
pub struct CycleReport {
    pub candles: usize,
    pub zones: usize,
    pub trades: Vec<TradeNotification>,
}

/// Run one full evaluation cycle against the current balance.
pub(crate) async fn run_cycle(
    config: &BotConfig,
    balance: f64,
    source: &dyn CandleSource,
    executor: &dyn TradeSink,
    log: &dyn LogSink,
) -> Result<CycleReport, CycleError> {
    let raw = source
        .fetch_recent_candles(&config.symbol, &config.timeframe, config.candle_limit)
        .await
        .map_err(CycleError::DataUnavailable)?;
    let series = CandleSeries::new(raw)?;
    let candles = series.as_slice();

    let labels = label_pivots(candles);

    // Zones are informational only; nothing below gates on them.
    let zones = detect_zones(candles, config.zone_sensitivity);
    debug!(zones = zones.len(), "zones extracted");

    let setups = check_setups(candles, &labels, &config.setup);

    let mut trades = Vec::with_capacity(setups.len());
    for setup in setups {
        let size = position_size(
            setup.entry,
            setup.stop_loss,
            balance,
            config.risk_per_trade,
            config.leverage,
        );
        let trade = TradeNotification::from_setup(&setup, size);
        log.append(&trade.to_string());
        executor.notify_trade(&trade);
        trades.push(trade);
    }

    Ok(CycleReport {
        candles: series.len(),
        zones: zones.len(),
        trades,
    })
}
