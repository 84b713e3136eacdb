// Library crate - exports the strategy core and bot orchestration

pub mod bot;
pub mod execution;
pub mod sources;
pub mod trading_core;

// Re-export commonly used types
pub use bot::{BotConfig, BotController, LogBuffer, LogSink};
pub use execution::{PaperTradeSink, TradeNotification, TradeSink};
pub use sources::{CandleSource, FixtureCandleSource, SyntheticCandleSource};
pub use trading_core::{Candle, CandleSeries, Direction, Setup};
