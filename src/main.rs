use std::{fs::File, sync::{Arc, Mutex}};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use portfolio_pulse::{
    api::AlphaVantageClient,
    app::{App, utils::format_money},
    config::Config,
    models::normalize_symbol,
    services::{
        PortfolioTrackerService, QuoteFetcher, RefreshScheduler, TokioClock,
        holdings_source::{load_holdings_csv, sample_holdings},
    },
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Track equity and crypto holdings with live quotes")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive dashboard (default)
    Dashboard {
        /// Re-fetch prices on the configured interval from the start
        #[arg(long)]
        auto_refresh: bool,
        /// CSV file with holdings, overrides HOLDINGS_CSV
        #[arg(long)]
        holdings: Option<String>,
    },
    /// Fetch quotes one by one, respecting the free-tier rate limit
    Quotes {
        #[arg(required = true)]
        symbols: Vec<String>,
    },
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn build_fetcher(config: &Config) -> Result<QuoteFetcher> {
    if config.api_key.is_demo() {
        warn!("ALPHA_VANTAGE_API_KEY not set, using the demo key (heavily rate limited)");
    }
    let client = AlphaVantageClient::new(
        &config.base_url,
        config.api_key.clone(),
        config.request_timeout,
    )?;

    Ok(QuoteFetcher::new(Arc::new(client), Arc::new(TokioClock)).with_batch_delay(config.batch_delay))
}

async fn run_dashboard(config: Config, auto_refresh: bool, holdings: Option<String>) -> Result<()> {
    let log_file = File::create(&config.log_file)
        .with_context(|| format!("Failed to create log file at path: {}", config.log_file))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(log_file))
        .init();

    let config = config.with_holdings_override(holdings);
    let holdings = match &config.holdings_path {
        Some(path) => load_holdings_csv(path)?,
        None => sample_holdings(),
    };

    let clock = Arc::new(TokioClock);
    let fetcher = build_fetcher(&config)?;
    let tracker = Arc::new(PortfolioTrackerService::new(
        holdings,
        Arc::new(fetcher),
        clock.clone(),
    ));

    let mut scheduler = RefreshScheduler::new(tracker.clone(), clock, config.refresh_interval);
    if auto_refresh {
        scheduler.start();
    }

    info!(holdings = tracker.holdings().len(), "starting dashboard");
    let mut app = App::new(tracker, scheduler, config.api_key.is_demo());
    app.run().await
}

async fn run_quotes(config: Config, symbols: Vec<String>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();

    let fetcher = build_fetcher(&config)?;
    let quotes = fetcher.fetch_batch(&symbols).await;

    for symbol in &symbols {
        if let Some(quote) = quotes.get(&normalize_symbol(symbol)) {
            println!(
                "{:<8} {:>14}  {:>8}  {}  {}",
                quote.symbol(),
                format_money(*quote.price()),
                format!("{:.2}%", quote.change_percent()),
                quote.asset_class(),
                quote.timestamp()
            );
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command {
        Some(Command::Quotes { symbols }) => run_quotes(config, symbols).await,
        Some(Command::Dashboard {
            auto_refresh,
            holdings,
        }) => run_dashboard(config, auto_refresh, holdings).await,
        None => run_dashboard(config, false, None).await,
    }
}
