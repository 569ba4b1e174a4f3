use std::{collections::BTreeMap, sync::Arc, time::Duration};

use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use super::clock::Clock;
use crate::{
    api::{FetchError, QuoteApi},
    config::DEFAULT_BATCH_DELAY_SECS,
    models::{AssetClass, Quote, normalize_symbol},
};

pub const CRYPTO_SYMBOLS: [&str; 10] = [
    "BTC", "ETH", "USDT", "BNB", "XRP", "ADA", "DOGE", "SOL", "DOT", "MATIC",
];

pub const QUOTE_CURRENCY: &str = "USD";

pub fn classify(symbol: &str) -> AssetClass {
    let symbol = normalize_symbol(symbol);
    if CRYPTO_SYMBOLS.contains(&symbol.as_str()) {
        AssetClass::Crypto
    } else {
        AssetClass::Equity
    }
}

pub fn is_crypto(symbol: &str) -> bool {
    classify(symbol) == AssetClass::Crypto
}

/// Anything that can turn a symbol into its latest quote.
#[async_trait]
pub trait PriceSource: Send + Sync {
    async fn fetch_quote(&self, symbol: &str) -> Result<Quote, FetchError>;

    async fn resolve_price(&self, symbol: &str) -> Result<Decimal, FetchError> {
        Ok(*self.fetch_quote(symbol).await?.price())
    }
}

pub struct QuoteFetcher {
    api: Arc<dyn QuoteApi>,
    clock: Arc<dyn Clock>,
    batch_delay: Duration,
}

impl QuoteFetcher {
    pub fn new(api: Arc<dyn QuoteApi>, clock: Arc<dyn Clock>) -> Self {
        Self {
            api,
            clock,
            batch_delay: Duration::from_secs(DEFAULT_BATCH_DELAY_SECS),
        }
    }

    pub fn with_batch_delay(mut self, batch_delay: Duration) -> Self {
        self.batch_delay = batch_delay;
        self
    }

    /// Fetches symbols one after another, waiting `batch_delay` between requests
    /// to stay under the free-tier quota of five calls a minute.
    ///
    /// Failed symbols are logged and left out of the result.
    pub async fn fetch_batch(&self, symbols: &[String]) -> BTreeMap<String, Quote> {
        let mut results = BTreeMap::new();

        for (i, symbol) in symbols.iter().enumerate() {
            match self.fetch_quote(symbol).await {
                Ok(quote) => {
                    results.insert(normalize_symbol(symbol), quote);
                }
                Err(err) => warn!(symbol = %symbol, error = %err, "skipping symbol in batch"),
            }

            if i + 1 < symbols.len() {
                debug!(delay_secs = self.batch_delay.as_secs(), "waiting before next request");
                self.clock.sleep(self.batch_delay).await;
            }
        }

        info!(
            requested = symbols.len(),
            resolved = results.len(),
            "batch fetch finished"
        );
        results
    }
}

#[async_trait]
impl PriceSource for QuoteFetcher {
    async fn fetch_quote(&self, symbol: &str) -> Result<Quote, FetchError> {
        let symbol = normalize_symbol(symbol);
        match classify(&symbol) {
            AssetClass::Crypto => self.api.exchange_rate(&symbol, QUOTE_CURRENCY).await,
            AssetClass::Equity => self.api.global_quote(&symbol).await,
        }
    }
}
