use std::time::Duration;

use reqwest::Client;

/// Shared HTTP client configuration for the order backend.
pub struct OrderBackendClient {
    pub client: Client,
    pub base_url: String,
}

impl OrderBackendClient {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the order creation endpoint URL.
    pub fn orders_url(&self) -> String {
        format!("{}/orders", self.base_url)
    }
}
