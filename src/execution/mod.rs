//! Trade execution interface
//!
//! The loop emits sized trade instructions through the `TradeSink`
//! capability, fire-and-forget. `PaperTradeSink` is the simulation-mode
//! implementation: it logs each notification and keeps it in memory for
//! inspection. Real broker connectivity lives outside this crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use crate::trading_core::{Direction, Setup};

/// A sized trade instruction emitted by the evaluation loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeNotification {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub direction: Direction,
    pub entry: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
    pub size: f64,
}

impl TradeNotification {
    pub fn from_setup(setup: &Setup, size: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            direction: setup.direction,
            entry: setup.entry,
            stop_loss: setup.stop_loss,
            take_profit: setup.take_profit,
            size,
        }
    }
}

impl std::fmt::Display for TradeNotification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[TRADE] {} | Entry: {}, SL: {}, TP: {}, Size: {}",
            self.direction, self.entry, self.stop_loss, self.take_profit, self.size
        )
    }
}

/// Receives trade notifications from the loop. Fire-and-forget: the loop
/// expects no acknowledgment and never blocks on the sink.
pub trait TradeSink: Send + Sync {
    fn notify_trade(&self, trade: &TradeNotification);
}

/// Simulation-mode sink: records notifications and logs them.
#[derive(Default)]
pub struct PaperTradeSink {
    trades: Mutex<Vec<TradeNotification>>,
}

impl PaperTradeSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all notified trades, in order.
    pub fn trades(&self) -> Vec<TradeNotification> {
        self.trades
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn trade_count(&self) -> usize {
        self.trades.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl TradeSink for PaperTradeSink {
    fn notify_trade(&self, trade: &TradeNotification) {
        info!("{}", trade);
        self.trades
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(trade.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paper_sink_records_in_order() {
        let sink = PaperTradeSink::new();
        let long = Setup {
            direction: Direction::Long,
            entry: 100.0,
            stop_loss: 90.0,
            take_profit: 120.0,
        };
        let short = Setup {
            direction: Direction::Short,
            entry: 95.0,
            stop_loss: 100.0,
            take_profit: 85.0,
        };

        sink.notify_trade(&TradeNotification::from_setup(&long, 0.02));
        sink.notify_trade(&TradeNotification::from_setup(&short, 0.01));

        let trades = sink.trades();
        assert_eq!(trades.len(), 2);
        assert_eq!(trades[0].direction, Direction::Long);
        assert_eq!(trades[1].direction, Direction::Short);
    }

    #[test]
    fn test_notification_serializes_for_external_consumers() {
        let setup = Setup {
            direction: Direction::Short,
            entry: 15.0,
            stop_loss: 20.0,
            take_profit: 5.0,
        };
        let trade = TradeNotification::from_setup(&setup, 0.01);

        let json = serde_json::to_value(&trade).unwrap();
        assert_eq!(json["direction"], "Short");
        assert_eq!(json["entry"], 15.0);
        assert_eq!(json["stop_loss"], 20.0);
        assert_eq!(json["take_profit"], 5.0);
        assert_eq!(json["size"], 0.01);
    }

    #[test]
    fn test_notification_display() {
        let setup = Setup {
            direction: Direction::Long,
            entry: 30.0,
            stop_loss: 12.0,
            take_profit: 66.0,
        };
        let trade = TradeNotification::from_setup(&setup, 0.02);
        assert_eq!(
            trade.to_string(),
            "[TRADE] LONG | Entry: 30, SL: 12, TP: 66, Size: 0.02"
        );
    }
}
