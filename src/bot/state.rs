//! Shared bot state and the log sink
//!
//! `BotState` holds the running flag and balance. The loop is the single
//! writer; readers (status queries, the presentation layer) tolerate
//! seeing state mid-update. `LogBuffer` is the in-memory `LogSink`
//! implementation, append-only with a tail view.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, RwLock};

/// Append-only message sink. The core relies only on ordering; display
/// and truncation belong to the presentation layer.
pub trait LogSink: Send + Sync {
    fn append(&self, message: &str);
}

/// In-memory ordered log.
#[derive(Default)]
pub struct LogBuffer {
    entries: Mutex<Vec<String>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent `n` entries, oldest first.
    pub fn tail(&self, n: usize) -> Vec<String> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        let start = entries.len().saturating_sub(n);
        entries[start..].to_vec()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LogSink for LogBuffer {
    fn append(&self, message: &str) {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(message.to_string());
    }
}

/// Lifecycle and balance state shared between the controller, the loop,
/// and any readers.
pub struct BotState {
    running: AtomicBool,
    balance: RwLock<f64>,
}

impl BotState {
    pub fn new(balance: f64) -> Self {
        Self {
            running: AtomicBool::new(false),
            balance: RwLock::new(balance),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    pub(crate) fn set_running(&self, running: bool) {
        self.running.store(running, Ordering::SeqCst);
    }

    pub fn balance(&self) -> f64 {
        *self.balance.read().unwrap_or_else(|e| e.into_inner())
    }

    /// Settle a P&L delta against the balance. The core itself only
    /// reads the balance; this is the hook an external settlement
    /// collaborator uses.
    pub fn apply_pnl(&self, delta: f64) {
        let mut balance = self.balance.write().unwrap_or_else(|e| e.into_inner());
        *balance += delta;
    }
}
