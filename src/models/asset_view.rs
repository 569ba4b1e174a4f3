use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

use super::{HoldingStatus, RefreshStatus};

/// Where the price behind a view came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PriceOrigin {
    Live,
    Baseline,
}

#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct AssetView {
    id: String,
    symbol: String,
    name: String,
    status: HoldingStatus,
    platform: String,
    price: Decimal,
    price_origin: PriceOrigin,
    change_24h: Decimal,
    shares: Decimal,
    invested_amount: Decimal,
    current_value: Decimal,
    gain: Decimal,
    /// `None` when nothing was invested.
    gain_percent: Option<Decimal>,
}

#[derive(Clone, Debug, Default, Eq, Getters, PartialEq, new)]
pub struct PortfolioTotals {
    total_value: Decimal,
    total_invested: Decimal,
    total_gain: Decimal,
    gain_percent: Option<Decimal>,
    asset_count: usize,
}

#[derive(Clone, Debug, Default, Getters, new)]
pub struct PortfolioSnapshot {
    views: Vec<AssetView>,
    totals: PortfolioTotals,
    status: RefreshStatus,
}
