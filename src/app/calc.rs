use rust_decimal::Decimal;

use crate::models::{AssetClass, AssetView, Holding, PortfolioTotals, PriceMap, PriceOrigin};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

pub fn current_value(price: Decimal, shares: Decimal) -> Decimal {
    price * shares
}

/// Percentage return on `invested`, or `None` when nothing was invested.
pub fn gain_percent(gain: Decimal, invested: Decimal) -> Option<Decimal> {
    if invested > Decimal::ZERO {
        gain.checked_div(invested).map(|ratio| ratio * HUNDRED)
    } else {
        None
    }
}

/// Live price if one was ever resolved, otherwise the holding's baseline.
pub fn resolve_price(holding: &Holding, prices: &PriceMap) -> (Decimal, PriceOrigin) {
    match prices.price(holding.symbol()) {
        Some(price) => (price, PriceOrigin::Live),
        None => (*holding.current_price(), PriceOrigin::Baseline),
    }
}

pub fn asset_view(holding: &Holding, prices: &PriceMap) -> AssetView {
    let (price, origin) = resolve_price(holding, prices);

    // Exchange rates carry no day change, so crypto keeps its baseline.
    let change_24h = prices
        .get(holding.symbol())
        .filter(|quote| *quote.asset_class() == AssetClass::Equity)
        .map(|quote| *quote.change_percent())
        .unwrap_or(*holding.change_24h());

    let value = current_value(price, *holding.shares());
    let gain = value - holding.invested_amount();

    AssetView::new(
        holding.id().clone(),
        holding.symbol().clone(),
        holding.name().clone(),
        *holding.status(),
        holding.platform().clone(),
        price,
        origin,
        change_24h,
        *holding.shares(),
        *holding.invested_amount(),
        value,
        gain,
        gain_percent(gain, *holding.invested_amount()),
    )
}

pub fn asset_views(holdings: &[Holding], prices: &PriceMap) -> Vec<AssetView> {
    holdings
        .iter()
        .map(|holding| asset_view(holding, prices))
        .collect()
}

pub fn portfolio_totals(views: &[AssetView]) -> PortfolioTotals {
    let total_value: Decimal = views.iter().map(|view| *view.current_value()).sum();
    let total_invested: Decimal = views.iter().map(|view| *view.invested_amount()).sum();
    let total_gain = total_value - total_invested;

    PortfolioTotals::new(
        total_value,
        total_invested,
        total_gain,
        gain_percent(total_gain, total_invested),
        views.len(),
    )
}
