//! Trading Core - swing-structure strategy logic
//!
//! This module contains the broker-agnostic strategy components:
//! - Candle series validation
//! - Swing pivot labeling
//! - Support/resistance zone extraction
//! - Bullish/bearish structure-break setup evaluation
//! - Risk-based position sizing

pub mod candles;
pub mod pivots;
pub mod setup;
pub mod sizing;
pub mod zones;

// Re-export commonly used types
pub use candles::{Candle, CandleError, CandleSeries};
pub use pivots::{high_pivot_prices, label_pivots, low_pivot_prices, PivotLabel};
pub use setup::{
    check_bearish_setup, check_bullish_setup, check_setups, Direction, Setup, SetupConfig,
};
pub use sizing::position_size;
pub use zones::{detect_zones, Zone, ZoneKind, DEFAULT_SENSITIVITY};
