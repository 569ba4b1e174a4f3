use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use strum_macros::Display;

/// Which Alpha Vantage endpoint a quote came from.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum AssetClass {
    Equity,
    Crypto,
}

#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct Quote {
    symbol: String,
    asset_class: AssetClass,
    price: Decimal,
    change: Decimal,
    change_percent: Decimal,
    volume: Option<i64>,
    /// As reported by the source: trading day for equities, last refresh for crypto.
    timestamp: String,
}
