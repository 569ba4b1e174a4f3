use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::error::FetchError;

pub async fn make_request(
    client: &Client,
    base_url: &str,
    params: &[(&str, &str)],
) -> Result<Value, FetchError> {
    let res = client.get(base_url).query(params).send().await?;

    if !res.status().is_success() {
        return Err(FetchError::Transport {
            status: Some(res.status().as_u16()),
            message: format!("Request failed: {}", res.status()),
        });
    }

    let text = res.text().await?;
    debug!(bytes = text.len(), "received Alpha Vantage response");

    serde_json::from_str::<Value>(&text)
        .map_err(|e| FetchError::transport(format!("Malformed response body: {}", e)))
}

/// Alpha Vantage answers with HTTP 200 and reports problems in the body.
pub fn check_api_notices(data: &Value) -> Result<(), FetchError> {
    if let Some(message) = data.get("Error Message").and_then(Value::as_str) {
        return Err(FetchError::Api(message.to_string()));
    }

    for key in ["Note", "Information"] {
        if let Some(message) = data.get(key).and_then(Value::as_str) {
            return Err(FetchError::RateLimit(message.to_string()));
        }
    }

    Ok(())
}

pub fn parse_response_object<T>(data: &Value, key: &str, symbol: &str) -> Result<T, FetchError>
where
    T: DeserializeOwned,
{
    check_api_notices(data)?;

    match data.get(key) {
        Some(Value::Object(obj)) if !obj.is_empty() => {
            serde_json::from_value(Value::Object(obj.clone())).map_err(|_| FetchError::Parse {
                symbol: symbol.to_string(),
                field: key.to_string(),
            })
        }
        _ => Err(FetchError::NoData(symbol.to_string())),
    }
}
