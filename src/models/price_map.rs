use std::collections::HashMap;

use rust_decimal::Decimal;

use super::{Quote, normalize_symbol};

/// Last successful quote per symbol for the current session.
///
/// Entries are only ever inserted or overwritten. A failed fetch never reaches
/// this type, so whatever was resolved last stays until something newer arrives.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PriceMap {
    quotes: HashMap<String, Quote>,
}

impl PriceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a successful quote under the requested symbol, last write wins.
    pub fn apply(&mut self, symbol: &str, quote: Quote) {
        self.quotes.insert(normalize_symbol(symbol), quote);
    }

    pub fn get(&self, symbol: &str) -> Option<&Quote> {
        self.quotes.get(&normalize_symbol(symbol))
    }

    pub fn price(&self, symbol: &str) -> Option<Decimal> {
        self.get(symbol).map(|quote| *quote.price())
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.quotes.contains_key(&normalize_symbol(symbol))
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}
