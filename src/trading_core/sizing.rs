//! Risk-based position sizing
//!
//! Converts a proposed entry/stop pair and the current balance into a
//! trade size under a fixed risk-per-trade fraction, capped so the
//! position's notional never exceeds the leveraged balance.

/// Size a position so that hitting the stop loses at most
/// `balance * risk_per_trade`. A zero stop distance or a non-positive
/// entry cannot be sized and returns 0 rather than an error.
pub fn position_size(
    entry: f64,
    stop_loss: f64,
    balance: f64,
    risk_per_trade: f64,
    leverage: f64,
) -> f64 {
    let price_diff = (entry - stop_loss).abs();
    if price_diff == 0.0 || entry <= 0.0 {
        return 0.0;
    }

    let risk_amount = balance * risk_per_trade;
    let size = risk_amount / price_diff;
    size.min(balance * leverage / entry)
}
