#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::{
        app::calc::{asset_view, asset_views, current_value, gain_percent, portfolio_totals},
        models::{AssetClass, PriceMap, PriceOrigin, Quote},
        services::holdings_source::sample_holdings,
        test::fakes::{crypto_quote, equity_quote, holding},
    };

    #[test]
    fn live_price_drives_value_and_gain() {
        let apple = holding("AAPL", dec!(178.72), dec!(5000), dec!(30));
        let mut prices = PriceMap::new();
        prices.apply("AAPL", equity_quote("AAPL", dec!(180.00)));

        let view = asset_view(&apple, &prices);

        assert_eq!(*view.price_origin(), PriceOrigin::Live);
        assert_eq!(*view.current_value(), dec!(5400.00));
        assert_eq!(*view.gain(), dec!(400.00));
        assert_eq!(*view.gain_percent(), Some(dec!(8.00)));
    }

    #[test]
    fn baseline_price_used_until_a_quote_arrives() {
        let apple = holding("AAPL", dec!(178.72), dec!(5000), dec!(30));
        let view = asset_view(&apple, &PriceMap::new());

        assert_eq!(*view.price_origin(), PriceOrigin::Baseline);
        assert_eq!(*view.price(), dec!(178.72));
        assert_eq!(*view.current_value(), dec!(5361.60));
        assert_eq!(*view.gain(), dec!(361.60));
    }

    #[test]
    fn crypto_value_uses_fractional_shares() {
        let bitcoin = holding("BTC", dec!(43250), dec!(10000), dec!(0.28));
        let mut prices = PriceMap::new();
        prices.apply("BTC", crypto_quote("BTC", dec!(45000)));

        let view = asset_view(&bitcoin, &prices);

        assert_eq!(*view.current_value(), dec!(12600.00));
        assert_eq!(*view.gain(), dec!(2600.00));
        assert_eq!(*view.gain_percent(), Some(dec!(26)));
    }

    #[test]
    fn zero_invested_has_no_gain_percent() {
        let gift = holding("AAPL", dec!(100), Decimal::ZERO, dec!(2));
        let view = asset_view(&gift, &PriceMap::new());

        assert_eq!(*view.gain(), dec!(200));
        assert_eq!(*view.gain_percent(), None);
        assert_eq!(gain_percent(dec!(50), dec!(-10)), None);

        let totals = portfolio_totals(&[view]);
        assert_eq!(*totals.gain_percent(), None);
    }

    #[test]
    fn current_value_is_monotonic_in_price() {
        let shares = dec!(3.5);
        let values: Vec<Decimal> = [dec!(0), dec!(1.25), dec!(10), dec!(10.01), dec!(999)]
            .iter()
            .map(|price| current_value(*price, shares))
            .collect();

        assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn totals_cover_the_whole_portfolio() {
        let holdings = sample_holdings();
        let totals = portfolio_totals(&asset_views(&holdings, &PriceMap::new()));

        assert_eq!(*totals.asset_count(), 6);
        assert_eq!(*totals.total_value(), dec!(44654.58));
        assert_eq!(*totals.total_invested(), dec!(40700));
        assert_eq!(*totals.total_gain(), dec!(3954.58));
        assert!(totals.gain_percent().is_some_and(|pct| pct > dec!(9.71) && pct < dec!(9.72)));
    }

    #[test]
    fn equity_day_change_replaces_baseline_but_crypto_keeps_it() {
        let apple = holding("AAPL", dec!(178.72), dec!(5000), dec!(30));
        let bitcoin = holding("BTC", dec!(43250), dec!(10000), dec!(0.28));

        let mut prices = PriceMap::new();
        prices.apply(
            "AAPL",
            Quote::new(
                String::from("AAPL"),
                AssetClass::Equity,
                dec!(180),
                dec!(1.28),
                dec!(0.7163),
                Some(52_000_000),
                String::from("2024-01-05"),
            ),
        );
        prices.apply("BTC", crypto_quote("BTC", dec!(45000)));

        assert_eq!(*asset_view(&apple, &prices).change_24h(), dec!(0.7163));
        assert_eq!(*asset_view(&bitcoin, &prices).change_24h(), *bitcoin.change_24h());
    }

    #[test]
    fn flat_equity_day_replaces_baseline_change() {
        let apple = holding("AAPL", dec!(178.72), dec!(5000), dec!(30));
        assert_eq!(*apple.change_24h(), Decimal::ONE);

        let mut prices = PriceMap::new();
        prices.apply("AAPL", equity_quote("AAPL", dec!(180)));

        let view = asset_view(&apple, &prices);

        assert_eq!(*view.price_origin(), PriceOrigin::Live);
        assert_eq!(*view.change_24h(), dec!(0));
    }

    #[test]
    fn unresolved_symbol_keeps_baseline_change() {
        let apple = holding("AAPL", dec!(178.72), dec!(5000), dec!(30));

        let view = asset_view(&apple, &PriceMap::new());

        assert_eq!(*view.change_24h(), Decimal::ONE);
    }
}
