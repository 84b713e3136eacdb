//! Scripted candle frames for deterministic tests
//!
//! Each fetch drains one pre-loaded frame; once the script runs out the
//! source reports data unavailable, which the loop treats as a
//! single-cycle error.

use anyhow::{bail, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::CandleSource;
use crate::trading_core::Candle;

/// One scripted response: a candle frame or a simulated outage.
pub enum FixtureFrame {
    Candles(Vec<Candle>),
    Unavailable(String),
}

pub struct FixtureCandleSource {
    frames: Mutex<VecDeque<FixtureFrame>>,
    fetches: AtomicUsize,
}

impl FixtureCandleSource {
    pub fn new(frames: Vec<FixtureFrame>) -> Self {
        Self {
            frames: Mutex::new(frames.into()),
            fetches: AtomicUsize::new(0),
        }
    }

    /// Convenience constructor for plain candle frames.
    pub fn from_candles(frames: Vec<Vec<Candle>>) -> Self {
        Self::new(frames.into_iter().map(FixtureFrame::Candles).collect())
    }

    /// Number of fetches observed so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CandleSource for FixtureCandleSource {
    async fn fetch_recent_candles(
        &self,
        _symbol: &str,
        _timeframe: &str,
        _limit: usize,
    ) -> Result<Vec<Candle>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let frame = self
            .frames
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front();

        match frame {
            Some(FixtureFrame::Candles(candles)) => Ok(candles),
            Some(FixtureFrame::Unavailable(reason)) => bail!("{reason}"),
            None => bail!("fixture script exhausted"),
        }
    }
}
