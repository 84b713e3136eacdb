//! The evaluation loop
//!
//! One background task per controller. Each cycle re-checks the balance
//! guard, runs the pipeline, and then sleeps out the cadence. The stop
//! signal interrupts the sleep but never the in-flight cycle; a cycle
//! error is logged and the loop continues. The loop clears the running
//! flag itself on every exit path.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use super::config::BotConfig;
use super::cycle::run_cycle;
use super::state::{BotState, LogSink};
use crate::execution::TradeSink;
use crate::sources::CandleSource;

pub(crate) async fn run_loop(
    config: BotConfig,
    state: Arc<BotState>,
    source: Arc<dyn CandleSource>,
    executor: Arc<dyn TradeSink>,
    log: Arc<dyn LogSink>,
    mut stop_rx: watch::Receiver<bool>,
) {
    info!(symbol = %config.symbol, "evaluation loop started");

    loop {
        if *stop_rx.borrow() {
            log.append("bot stopped");
            info!("stop signal observed");
            break;
        }

        let balance = state.balance();
        if balance < config.min_viable_balance {
            // terminal self-stop, logged once
            log.append("balance too low, stopping bot");
            warn!(balance, "balance below minimum viable, stopping");
            break;
        }

        match run_cycle(
            &config,
            balance,
            source.as_ref(),
            executor.as_ref(),
            log.as_ref(),
        )
        .await
        {
            Ok(report) => {
                debug!(
                    candles = report.candles,
                    zones = report.zones,
                    trades = report.trades.len(),
                    "cycle complete"
                );
            }
            Err(err) if err.is_recoverable() => {
                log.append(&format!("Error: {err}"));
                warn!(error = %err, "cycle failed, continuing");
            }
            Err(err) => {
                log.append(&format!("Fatal error: {err}"));
                warn!(error = %err, "cycle failed, stopping");
                break;
            }
        }

        tokio::select! {
            _ = sleep(Duration::from_secs(config.cycle_interval_secs)) => {}
            changed = stop_rx.changed() => {
                // a dropped sender means the controller is gone
                if changed.is_err() {
                    break;
                }
            }
        }
    }

    state.set_running(false);
    info!("evaluation loop exited");
}
