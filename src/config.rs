use std::{env, time::Duration};

use anyhow::{Context, Result, bail};

use crate::api::av::BASE_URL;

pub const DEMO_API_KEY: &str = "demo";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 5 * 60;
pub const DEFAULT_BATCH_DELAY_SECS: u64 = 12;
pub const DEFAULT_LOG_FILE: &str = "portfolio-pulse.log";

/// Alpha Vantage credentials. The demo key works but is heavily rate limited.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ApiKey {
    Demo,
    Provided(String),
}

impl ApiKey {
    pub fn from_value(value: Option<String>) -> Self {
        match value.map(|v| v.trim().to_string()) {
            Some(key) if !key.is_empty() && key != DEMO_API_KEY => ApiKey::Provided(key),
            _ => ApiKey::Demo,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ApiKey::Demo => DEMO_API_KEY,
            ApiKey::Provided(key) => key,
        }
    }

    pub fn is_demo(&self) -> bool {
        matches!(self, ApiKey::Demo)
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: ApiKey,
    pub base_url: String,
    pub request_timeout: Duration,
    pub refresh_interval: Duration,
    pub batch_delay: Duration,
    pub holdings_path: Option<String>,
    pub log_file: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secs = |key: &str, default: u64| -> Result<Duration> {
            match lookup(key) {
                Some(raw) => raw
                    .trim()
                    .parse::<u64>()
                    .map(Duration::from_secs)
                    .with_context(|| format!("Failed to parse {} '{}'", key, raw)),
                None => Ok(Duration::from_secs(default)),
            }
        };

        Ok(Self {
            api_key: ApiKey::from_value(lookup("ALPHA_VANTAGE_API_KEY")),
            base_url: lookup("ALPHA_VANTAGE_BASE_URL").unwrap_or_else(|| BASE_URL.to_string()),
            request_timeout: non_zero(
                "QUOTE_TIMEOUT_SECS",
                secs("QUOTE_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?,
            )?,
            refresh_interval: non_zero(
                "REFRESH_INTERVAL_SECS",
                secs("REFRESH_INTERVAL_SECS", DEFAULT_REFRESH_INTERVAL_SECS)?,
            )?,
            batch_delay: secs("BATCH_DELAY_SECS", DEFAULT_BATCH_DELAY_SECS)?,
            holdings_path: lookup("HOLDINGS_CSV").and_then(expand_path),
            log_file: lookup("PORTFOLIO_PULSE_LOG").unwrap_or_else(|| DEFAULT_LOG_FILE.to_string()),
        })
    }

    /// A `--holdings` flag wins over `HOLDINGS_CSV`.
    pub fn with_holdings_override(mut self, path: Option<String>) -> Self {
        if let Some(path) = path.and_then(expand_path) {
            self.holdings_path = Some(path);
        }
        self
    }
}

fn expand_path(path: String) -> Option<String> {
    if path.trim().is_empty() {
        return None;
    }
    Some(shellexpand::tilde(&path).into_owned())
}

fn non_zero(key: &str, value: Duration) -> Result<Duration> {
    if value.is_zero() {
        bail!("{} must be greater than zero", key);
    }
    Ok(value)
}
