use std::str::FromStr;

use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::error::FetchError;
use crate::models::{AssetClass, Quote};

#[derive(Debug, Deserialize, Getters, new)]
pub struct AvGlobalQuoteDto {
    #[serde(rename = "01. symbol")]
    symbol: String,
    #[serde(rename = "02. open", default)]
    open: String,
    #[serde(rename = "03. high", default)]
    high: String,
    #[serde(rename = "04. low", default)]
    low: String,
    #[serde(rename = "05. price")]
    price: String,
    #[serde(rename = "06. volume", default)]
    volume: String,
    #[serde(rename = "07. latest trading day", default)]
    latest_trading_day: String,
    #[serde(rename = "08. previous close", default)]
    previous_close: String,
    #[serde(rename = "09. change", default)]
    change: String,
    #[serde(rename = "10. change percent", default)]
    change_percent: String,
}

impl AvGlobalQuoteDto {
    pub fn to_quote(&self) -> Result<Quote, FetchError> {
        let price = parse_decimal(&self.price, &self.symbol, "price")?;
        let change = parse_optional_decimal(&self.change, &self.symbol, "change")?;
        let change_percent = parse_optional_decimal(
            self.change_percent.trim_end_matches('%'),
            &self.symbol,
            "change percent",
        )?;

        Ok(Quote::new(
            self.symbol.clone(),
            AssetClass::Equity,
            price,
            change,
            change_percent,
            self.volume.trim().parse::<i64>().ok(),
            self.latest_trading_day.clone(),
        ))
    }
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct AvExchangeRateDto {
    #[serde(rename = "1. From_Currency Code")]
    from_currency_code: String,
    #[serde(rename = "2. From_Currency Name", default)]
    from_currency_name: String,
    #[serde(rename = "3. To_Currency Code", default)]
    to_currency_code: String,
    #[serde(rename = "4. To_Currency Name", default)]
    to_currency_name: String,
    #[serde(rename = "5. Exchange Rate")]
    exchange_rate: String,
    #[serde(rename = "6. Last Refreshed", default)]
    last_refreshed: String,
    #[serde(rename = "7. Time Zone", default)]
    time_zone: String,
}

impl AvExchangeRateDto {
    /// The exchange-rate endpoint has no 24h change, so it is reported as zero.
    pub fn to_quote(&self) -> Result<Quote, FetchError> {
        let price = parse_decimal(&self.exchange_rate, &self.from_currency_code, "exchange rate")?;

        Ok(Quote::new(
            self.from_currency_code.clone(),
            AssetClass::Crypto,
            price,
            Decimal::ZERO,
            Decimal::ZERO,
            None,
            self.last_refreshed.clone(),
        ))
    }
}

fn parse_decimal(field: &str, symbol: &str, field_name: &str) -> Result<Decimal, FetchError> {
    Decimal::from_str(field.trim()).map_err(|_| FetchError::Parse {
        symbol: symbol.to_string(),
        field: field_name.to_string(),
    })
}

fn parse_optional_decimal(field: &str, symbol: &str, field_name: &str) -> Result<Decimal, FetchError> {
    if field.trim().is_empty() {
        return Ok(Decimal::ZERO);
    }
    parse_decimal(field, symbol, field_name)
}
