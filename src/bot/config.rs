//! Configuration for the evaluation loop

use serde::{Deserialize, Serialize};

use crate::trading_core::{SetupConfig, DEFAULT_SENSITIVITY};

/// Configuration for the bot controller and its evaluation loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// Symbol to evaluate (e.g., "BTC/USDT")
    pub symbol: String,

    /// Candle timeframe requested from the source (e.g., "15m")
    pub timeframe: String,

    /// Number of recent candles fetched per cycle
    pub candle_limit: usize,

    /// Half-width of the zone extraction window
    pub zone_sensitivity: usize,

    /// Setup evaluation parameters (lookback, reward ratio)
    pub setup: SetupConfig,

    /// Fraction of balance risked per trade
    pub risk_per_trade: f64,

    /// Leverage multiplier applied to the notional cap
    pub leverage: f64,

    /// Starting balance
    pub initial_balance: f64,

    /// Balance below which the loop self-stops
    pub min_viable_balance: f64,

    /// Seconds between evaluation cycles (wall clock, independent of the
    /// candle timeframe)
    pub cycle_interval_secs: u64,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            symbol: "BTC/USDT".to_string(),
            timeframe: "15m".to_string(),
            candle_limit: 100,
            zone_sensitivity: DEFAULT_SENSITIVITY,
            setup: SetupConfig::default(),
            risk_per_trade: 0.02,
            leverage: 1.0,
            initial_balance: 10.0,
            min_viable_balance: 5.0,
            cycle_interval_secs: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BotConfig::default();
        assert_eq!(config.symbol, "BTC/USDT");
        assert_eq!(config.risk_per_trade, 0.02);
        assert_eq!(config.min_viable_balance, 5.0);
        assert_eq!(config.setup.lookback, 10);
    }
}
