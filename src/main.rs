use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;

use pivotflow::bot::{BotConfig, BotController, LogBuffer, LogSink};
use pivotflow::execution::{PaperTradeSink, TradeSink};
use pivotflow::sources::{CandleSource, SyntheticCandleSource};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Symbol to evaluate
    #[arg(short, long, env = "PIVOTFLOW_SYMBOL", default_value = "BTC/USDT")]
    symbol: String,

    /// Candle timeframe (e.g., "15m", "1h")
    #[arg(short, long, default_value = "15m")]
    timeframe: String,

    /// Starting balance
    #[arg(short, long, default_value = "10.0")]
    balance: f64,

    /// Fraction of balance risked per trade
    #[arg(long, default_value = "0.02")]
    risk_per_trade: f64,

    /// Leverage multiplier on the notional cap
    #[arg(long, default_value = "1.0")]
    leverage: f64,

    /// Seconds between evaluation cycles
    #[arg(long, default_value = "60")]
    interval: u64,

    /// Base price for the synthetic candle source
    #[arg(long, default_value = "30000.0")]
    base_price: f64,

    /// Seed for the synthetic candle source (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pivotflow=info".into()),
        )
        .init();

    let args = Args::parse();

    let config = BotConfig {
        symbol: args.symbol,
        timeframe: args.timeframe,
        risk_per_trade: args.risk_per_trade,
        leverage: args.leverage,
        initial_balance: args.balance,
        cycle_interval_secs: args.interval,
        ..BotConfig::default()
    };

    let source: Arc<dyn CandleSource> = Arc::new(match args.seed {
        Some(seed) => SyntheticCandleSource::seeded(args.base_price, 0.01, seed),
        None => SyntheticCandleSource::new(args.base_price, 0.01),
    });
    let executor = Arc::new(PaperTradeSink::new());
    let log = Arc::new(LogBuffer::new());

    let controller = BotController::new(
        config,
        source,
        Arc::clone(&executor) as Arc<dyn TradeSink>,
        Arc::clone(&log) as Arc<dyn LogSink>,
    );

    controller.start().await;
    info!("bot running, press Ctrl-C to stop");

    tokio::signal::ctrl_c().await?;
    info!("shutting down");
    controller.stop().await;

    info!(
        balance = controller.balance(),
        trades = executor.trade_count(),
        "final state"
    );
    for entry in log.tail(50) {
        info!("{}", entry);
    }

    Ok(())
}
