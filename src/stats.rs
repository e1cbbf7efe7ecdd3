use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;

use crate::error::RelayError;
use crate::types::StatsResponse;

/// Source of stats text for a symbol
#[async_trait]
pub trait StatsSource: Send + Sync {
    async fn fetch(&self, symbol: &str) -> Result<String, RelayError>;
}

pub struct StatsClient {
    client: Client,
    url: String,
}

impl StatsClient {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl StatsSource for StatsClient {
    /// One GET to `<url>?symbol=<symbol>`, body returned as-is
    async fn fetch(&self, symbol: &str) -> Result<String, RelayError> {
        let res = self
            .client
            .get(&self.url)
            .query(&[("symbol", symbol)])
            .send()
            .await
            .map_err(RelayError::Request)?;

        let status = res.status();
        let body = res.text().await.map_err(RelayError::ResponseRead)?;

        if !status.is_success() {
            warn!("Stats API returned {} for {}: {}", status, symbol, body);
        }
        if let Some(parsed) = StatsResponse::parse(&body) {
            debug!(
                "Stats for {}: name={:?} price={:?} change={:?}",
                symbol, parsed.currency_name, parsed.price, parsed.change
            );
        }

        Ok(body)
    }
}
