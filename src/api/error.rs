use thiserror::Error;

/// Why a single quote request did not produce a price.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum FetchError {
    #[error("transport error: {message}")]
    Transport {
        status: Option<u16>,
        message: String,
    },

    #[error("API error: {0}")]
    Api(String),

    #[error("API rate limit reached: {0}")]
    RateLimit(String),

    #[error("no data available for symbol {0}")]
    NoData(String),

    #[error("failed to parse {field} for symbol {symbol}")]
    Parse { symbol: String, field: String },
}

impl FetchError {
    pub fn transport(message: impl Into<String>) -> Self {
        FetchError::Transport {
            status: None,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}
