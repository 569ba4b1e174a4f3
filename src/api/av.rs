use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::{
    QuoteApi,
    av_dto::{AvExchangeRateDto, AvGlobalQuoteDto},
    error::FetchError,
    utils::{make_request, parse_response_object},
};
use crate::{config::ApiKey, models::Quote};

pub const BASE_URL: &str = "https://www.alphavantage.co/query";

const GLOBAL_QUOTE_KEY: &str = "Global Quote";
const EXCHANGE_RATE_KEY: &str = "Realtime Currency Exchange Rate";

#[derive(Clone, Debug)]
pub struct AlphaVantageClient {
    client: Client,
    base_url: String,
    api_key: ApiKey,
}

impl AlphaVantageClient {
    pub fn new(base_url: &str, api_key: ApiKey, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            api_key,
        })
    }

    pub async fn get_quote(&self, symbol: &str) -> Result<AvGlobalQuoteDto, FetchError> {
        debug!(symbol, "requesting global quote");
        let params = [
            ("function", "GLOBAL_QUOTE"),
            ("symbol", symbol),
            ("apikey", self.api_key.as_str()),
        ];
        let res = make_request(&self.client, &self.base_url, &params).await?;

        parse_response_object::<AvGlobalQuoteDto>(&res, GLOBAL_QUOTE_KEY, symbol)
    }

    pub async fn get_exchange_rate(
        &self,
        from_currency: &str,
        to_currency: &str,
    ) -> Result<AvExchangeRateDto, FetchError> {
        debug!(from_currency, to_currency, "requesting exchange rate");
        let params = [
            ("function", "CURRENCY_EXCHANGE_RATE"),
            ("from_currency", from_currency),
            ("to_currency", to_currency),
            ("apikey", self.api_key.as_str()),
        ];
        let res = make_request(&self.client, &self.base_url, &params).await?;

        parse_response_object::<AvExchangeRateDto>(&res, EXCHANGE_RATE_KEY, from_currency)
    }
}

#[async_trait]
impl QuoteApi for AlphaVantageClient {
    async fn global_quote(&self, symbol: &str) -> Result<Quote, FetchError> {
        self.get_quote(symbol).await?.to_quote()
    }

    async fn exchange_rate(&self, from_currency: &str, to_currency: &str) -> Result<Quote, FetchError> {
        self.get_exchange_rate(from_currency, to_currency)
            .await?
            .to_quote()
    }
}
