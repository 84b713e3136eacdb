//! Bot lifecycle control
//!
//! Owns the single evaluation task. The task slot is replaced only after
//! the prior task has been observed finished, so repeated starts can
//! never run two loops against the same state.

use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tracing::info;

use super::config::BotConfig;
use super::runner::run_loop;
use super::state::{BotState, LogSink};
use crate::execution::TradeSink;
use crate::sources::CandleSource;

struct LoopTask {
    handle: JoinHandle<()>,
    stop_tx: watch::Sender<bool>,
}

/// Controls the evaluation loop over injected collaborators.
pub struct BotController {
    config: BotConfig,
    state: Arc<BotState>,
    source: Arc<dyn CandleSource>,
    executor: Arc<dyn TradeSink>,
    log: Arc<dyn LogSink>,
    task: Mutex<Option<LoopTask>>,
}

impl BotController {
    pub fn new(
        config: BotConfig,
        source: Arc<dyn CandleSource>,
        executor: Arc<dyn TradeSink>,
        log: Arc<dyn LogSink>,
    ) -> Self {
        let state = Arc::new(BotState::new(config.initial_balance));
        Self {
            config,
            state,
            source,
            executor,
            log,
            task: Mutex::new(None),
        }
    }

    /// Start the evaluation loop. A start while a loop is already active
    /// is a no-op returning `false`; a loop that exited on its own (fatal
    /// balance) is reaped and replaced.
    pub async fn start(&self) -> bool {
        let mut slot = self.task.lock().await;
        if let Some(task) = slot.as_ref() {
            if !task.handle.is_finished() {
                info!("start ignored, loop already running");
                return false;
            }
        }

        let (stop_tx, stop_rx) = watch::channel(false);
        self.state.set_running(true);
        self.log.append("bot started");

        let handle = tokio::spawn(run_loop(
            self.config.clone(),
            Arc::clone(&self.state),
            Arc::clone(&self.source),
            Arc::clone(&self.executor),
            Arc::clone(&self.log),
            stop_rx,
        ));
        *slot = Some(LoopTask { handle, stop_tx });
        true
    }

    /// Signal the loop to stop and wait for it to exit. The slot lock is
    /// held across the join, so a concurrent start cannot spawn a second
    /// loop while the old one drains. No-op when nothing is running.
    pub async fn stop(&self) {
        let mut slot = self.task.lock().await;
        if let Some(task) = slot.take() {
            let _ = task.stop_tx.send(true);
            let _ = task.handle.await;
        }
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn balance(&self) -> f64 {
        self.state.balance()
    }

    /// Shared state handle, for settlement and status readers.
    pub fn state(&self) -> Arc<BotState> {
        Arc::clone(&self.state)
    }
}
