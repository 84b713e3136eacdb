//! Bot orchestration - lifecycle, state, and the evaluation loop
//!
//! `BotController` owns the single background evaluation task and the
//! shared `BotState`; `run_cycle` is the per-tick pipeline from candle
//! fetch to trade notification.

pub mod config;
pub mod controller;
pub mod cycle;
mod runner;
pub mod state;

// Re-export commonly used types
pub use config::BotConfig;
pub use controller::BotController;
pub use cycle::{CycleError, CycleReport};
pub use state::{BotState, LogBuffer, LogSink};
