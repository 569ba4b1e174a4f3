pub mod av;
pub mod av_dto;
pub mod error;
pub mod utils;

use async_trait::async_trait;

pub use av::AlphaVantageClient;
pub use error::FetchError;

use crate::models::Quote;

/// The two quote endpoints the fetcher needs, so tests can stand in for HTTP.
#[async_trait]
pub trait QuoteApi: Send + Sync {
    async fn global_quote(&self, symbol: &str) -> Result<Quote, FetchError>;

    async fn exchange_rate(&self, from_currency: &str, to_currency: &str) -> Result<Quote, FetchError>;
}
