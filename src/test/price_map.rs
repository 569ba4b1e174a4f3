#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::{models::PriceMap, test::fakes::equity_quote};

    #[test]
    fn applying_the_same_quote_twice_is_idempotent() {
        let quote = equity_quote("AAPL", dec!(180));

        let mut once = PriceMap::new();
        once.apply("AAPL", quote.clone());

        let mut twice = PriceMap::new();
        twice.apply("AAPL", quote.clone());
        twice.apply("AAPL", quote);

        assert_eq!(once, twice);
        assert_eq!(twice.len(), 1);
    }

    #[test]
    fn newer_quote_overwrites_and_lookup_ignores_case() {
        let mut prices = PriceMap::new();
        prices.apply("msft", equity_quote("MSFT", dec!(378.91)));
        prices.apply("MSFT", equity_quote("MSFT", dec!(380.10)));

        assert_eq!(prices.len(), 1);
        assert!(prices.contains("Msft"));
        assert_eq!(prices.price("msft"), Some(dec!(380.10)));
        assert_eq!(prices.price("GOOGL"), None);
    }
}
