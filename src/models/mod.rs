pub mod asset_view;
pub mod holding;
pub mod price_map;
pub mod quote;
pub mod refresh;

pub use asset_view::{AssetView, PortfolioSnapshot, PortfolioTotals, PriceOrigin};
pub use holding::{Holding, HoldingStatus};
pub use price_map::PriceMap;
pub use quote::{AssetClass, Quote};
pub use refresh::{RefreshReport, RefreshStatus};

/// Trims and uppercases a ticker so lookups match regardless of how it was typed.
pub fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_ascii_uppercase()
}
