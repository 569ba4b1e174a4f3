use derive_getters::Getters;
use rust_decimal::Decimal;
use strum_macros::{Display, EnumString};

use super::normalize_symbol;

#[derive(Clone, Debug, Eq, Getters, PartialEq)]
pub struct Holding {
    id: String,
    symbol: String,
    name: String,
    current_price: Decimal,
    invested_amount: Decimal,
    shares: Decimal,
    status: HoldingStatus,
    platform: String,
    change_24h: Decimal,
}

impl Holding {
    pub fn new(
        id: String,
        symbol: &str,
        name: String,
        current_price: Decimal,
        invested_amount: Decimal,
        shares: Decimal,
        status: HoldingStatus,
        platform: String,
        change_24h: Decimal,
    ) -> Self {
        Self {
            id,
            symbol: normalize_symbol(symbol),
            name,
            current_price,
            invested_amount,
            shares,
            status,
            platform,
            change_24h,
        }
    }
}

#[derive(Clone, Copy, Debug, Display, EnumString, Eq, PartialEq)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum HoldingStatus {
    Active,
    Pending,
    Inactive,
}
