use std::{path::PathBuf, time::Duration};

use blocksquare_tvl::provider::envio::DEFAULT_ENDPOINT;

const DEFAULT_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_CHAIN: &str = "ethereum";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub endpoint: String,
    pub request_timeout: Duration,
    pub chain: String,
    pub address_book_path: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build a config from any variable lookup; unset or invalid values
    /// (including a zero timeout) fall back to defaults.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let endpoint = var("BSQ_ENDPOINT")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let timeout_ms: u64 = var("BSQ_REQUEST_TIMEOUT_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|ms: &u64| *ms > 0)
            .unwrap_or(DEFAULT_TIMEOUT_MS);
        let chain = var("BSQ_CHAIN")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_CHAIN.into());
        let address_book_path = var("BSQ_ADDRESS_BOOK")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);
        let log_format = match var("BSQ_LOG_FORMAT") {
            Some(s) if s.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };
        Self {
            endpoint,
            request_timeout: Duration::from_millis(timeout_ms),
            chain,
            address_book_path,
            log_format,
        }
    }
}
