use std::{
    collections::BTreeSet,
    sync::{
        Arc, PoisonError, RwLock,
        atomic::{AtomicBool, Ordering},
    },
};

use futures::{StreamExt, stream::FuturesUnordered};
use tracing::{debug, info, warn};

use super::{clock::Clock, quote_fetcher::PriceSource};
use crate::{
    app::calc,
    models::{
        AssetView, Holding, PortfolioSnapshot, PortfolioTotals, PriceMap, RefreshReport,
        RefreshStatus,
    },
};

/// Holds the session's holdings and price cache and keeps them in step with
/// the quote source.
///
/// Only `refresh` writes to the price map. At most one refresh runs at a time;
/// a request that arrives while one is in flight is dropped and reported as
/// skipped.
pub struct PortfolioTrackerService {
    holdings: Vec<Holding>,
    source: Arc<dyn PriceSource>,
    clock: Arc<dyn Clock>,
    prices: RwLock<PriceMap>,
    status: RwLock<RefreshStatus>,
    in_flight: AtomicBool,
}

impl PortfolioTrackerService {
    pub fn new(holdings: Vec<Holding>, source: Arc<dyn PriceSource>, clock: Arc<dyn Clock>) -> Self {
        Self {
            holdings,
            source,
            clock,
            prices: RwLock::new(PriceMap::new()),
            status: RwLock::new(RefreshStatus::default()),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    /// Distinct symbols across all holdings, one request each per refresh.
    pub fn symbols(&self) -> Vec<String> {
        self.holdings
            .iter()
            .map(|holding| holding.symbol().clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn prices(&self) -> PriceMap {
        self.prices
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn status(&self) -> RefreshStatus {
        self.status
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_refreshing(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn dismiss_error(&self) {
        self.status
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .dismiss_error();
    }

    pub fn views(&self) -> Vec<AssetView> {
        let prices = self.prices.read().unwrap_or_else(PoisonError::into_inner);
        calc::asset_views(&self.holdings, &prices)
    }

    pub fn totals(&self) -> PortfolioTotals {
        calc::portfolio_totals(&self.views())
    }

    pub fn snapshot(&self) -> PortfolioSnapshot {
        let views = self.views();
        let totals = calc::portfolio_totals(&views);
        PortfolioSnapshot::new(views, totals, self.status())
    }

    /// Requests every held symbol concurrently and merges each success as it
    /// lands. Failures keep the previous price and never fail the cycle.
    pub async fn refresh(&self) -> RefreshReport {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("refresh already in flight, skipping");
            return RefreshReport::coalesced();
        }
        let _guard = InFlightGuard { tracker: self };

        let symbols = self.symbols();
        if symbols.is_empty() {
            return RefreshReport::default();
        }

        self.status
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .begin();

        let mut pending: FuturesUnordered<_> = symbols
            .iter()
            .map(|symbol| async move { (symbol, self.source.fetch_quote(symbol).await) })
            .collect();

        let mut updated = 0;
        let mut failed = 0;
        let mut last_error = None;

        while let Some((symbol, result)) = pending.next().await {
            match result {
                Ok(quote) => {
                    debug!(symbol = %symbol, price = %quote.price(), "price updated");
                    self.prices
                        .write()
                        .unwrap_or_else(PoisonError::into_inner)
                        .apply(symbol, quote);
                    updated += 1;
                }
                Err(err) => {
                    warn!(symbol = %symbol, error = %err, "keeping last known price");
                    failed += 1;
                    last_error = Some(err.to_string());
                }
            }
        }

        self.status
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .finish(last_error.clone(), self.clock.now());

        info!(requested = symbols.len(), updated, failed, "refresh finished");
        RefreshReport::new(symbols.len(), updated, failed, last_error)
    }
}

/// Releases the in-flight flag even if the refresh future is dropped midway.
struct InFlightGuard<'a> {
    tracker: &'a PortfolioTrackerService,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.tracker
            .status
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .abandon();
        self.tracker.in_flight.store(false, Ordering::Release);
    }
}
