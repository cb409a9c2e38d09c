use std::env;
use std::time::Duration;

use anyhow::Context;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Order backend configuration
///
/// Environment variables:
/// - ORDER_BACKEND_URL: Base URL of the order backend (default: unset, orders are not forwarded)
/// - ORDER_BACKEND_TIMEOUT_SECS: HTTP timeout in seconds (default: 10)
#[derive(Debug, Clone)]
pub struct OrderBackendConfig {
    pub url: Option<String>,
    pub timeout: Duration,
}

impl OrderBackendConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_values(
            env::var("ORDER_BACKEND_URL").ok(),
            env::var("ORDER_BACKEND_TIMEOUT_SECS").ok(),
        )
    }

    fn from_values(url: Option<String>, timeout: Option<String>) -> anyhow::Result<Self> {
        let url = url
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty());

        let timeout_secs = match timeout {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("ORDER_BACKEND_TIMEOUT_SECS is not a number: {}", raw))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
