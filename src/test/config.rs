#[cfg(test)]
mod tests {
    use std::{collections::HashMap, time::Duration};

    use crate::{
        api::av::BASE_URL,
        config::{ApiKey, Config, DEFAULT_LOG_FILE},
    };

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_use_demo_mode() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.api_key, ApiKey::Demo);
        assert_eq!(config.api_key.as_str(), "demo");
        assert_eq!(config.base_url, BASE_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.refresh_interval, Duration::from_secs(300));
        assert_eq!(config.batch_delay, Duration::from_secs(12));
        assert_eq!(config.holdings_path, None);
        assert_eq!(config.log_file, DEFAULT_LOG_FILE);
    }

    #[test]
    fn blank_key_is_still_demo() {
        let config = config_from(&[("ALPHA_VANTAGE_API_KEY", "  ")]).unwrap();

        assert!(config.api_key.is_demo());
    }

    #[test]
    fn provided_key_and_overrides() {
        let config = config_from(&[
            ("ALPHA_VANTAGE_API_KEY", "ABC123"),
            ("REFRESH_INTERVAL_SECS", "60"),
            ("BATCH_DELAY_SECS", "15"),
            ("HOLDINGS_CSV", "/tmp/holdings.csv"),
        ])
        .unwrap();

        assert_eq!(config.api_key, ApiKey::Provided(String::from("ABC123")));
        assert!(!config.api_key.is_demo());
        assert_eq!(config.refresh_interval, Duration::from_secs(60));
        assert_eq!(config.batch_delay, Duration::from_secs(15));
        assert_eq!(config.holdings_path.as_deref(), Some("/tmp/holdings.csv"));
    }

    #[test]
    fn invalid_interval_is_rejected() {
        let err = config_from(&[("REFRESH_INTERVAL_SECS", "five")]).unwrap_err();

        assert!(err.to_string().contains("REFRESH_INTERVAL_SECS"));
    }

    #[test]
    fn zero_refresh_interval_is_rejected() {
        let err = config_from(&[("REFRESH_INTERVAL_SECS", "0")]).unwrap_err();

        assert_eq!(err.to_string(), "REFRESH_INTERVAL_SECS must be greater than zero");
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = config_from(&[("QUOTE_TIMEOUT_SECS", " 0 ")]).unwrap_err();

        assert_eq!(err.to_string(), "QUOTE_TIMEOUT_SECS must be greater than zero");
    }

    #[test]
    fn zero_batch_delay_disables_throttling() {
        let config = config_from(&[("BATCH_DELAY_SECS", "0")]).unwrap();

        assert_eq!(config.batch_delay, Duration::ZERO);
    }

    #[test]
    fn holdings_flag_overrides_env_path() {
        let config = config_from(&[("HOLDINGS_CSV", "/tmp/env.csv")])
            .unwrap()
            .with_holdings_override(Some(String::from("/tmp/flag.csv")));

        assert_eq!(config.holdings_path.as_deref(), Some("/tmp/flag.csv"));
    }

    #[test]
    fn missing_holdings_flag_keeps_env_path() {
        let config = config_from(&[("HOLDINGS_CSV", "/tmp/env.csv")])
            .unwrap()
            .with_holdings_override(None);

        assert_eq!(config.holdings_path.as_deref(), Some("/tmp/env.csv"));
    }

    #[test]
    fn holdings_paths_expand_tilde_once() {
        let home = shellexpand::tilde("~").into_owned();

        let from_env = config_from(&[("HOLDINGS_CSV", "~/env.csv")]).unwrap();
        assert_eq!(from_env.holdings_path, Some(format!("{}/env.csv", home)));

        let from_flag = from_env.with_holdings_override(Some(String::from("~/flag.csv")));
        assert_eq!(from_flag.holdings_path, Some(format!("{}/flag.csv", home)));
    }
}
