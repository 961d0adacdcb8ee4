use super::FeedSource;
use crate::config::Config;
use crate::error::{fetch_error, AppResult};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Fetches the feed over HTTP with a bounded timeout
#[derive(Debug, Clone)]
pub struct HttpFeedFetcher {
    url: Url,
    client: Client,
}

impl HttpFeedFetcher {
    /// Create a fetcher for `url`; each request is bounded by `timeout`
    pub fn new(url: Url, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("calview/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| fetch_error(&format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { url, client })
    }

    /// Create a fetcher from the service configuration
    pub fn from_config(config: &Config) -> AppResult<Self> {
        Self::new(
            config.feed_url()?,
            Duration::from_secs(config.fetch_timeout_secs),
        )
    }
}

#[async_trait]
impl FeedSource for HttpFeedFetcher {
    fn describe(&self) -> String {
        // Feed URLs often carry a secret token in the path
        format!(
            "{}://{}",
            self.url.scheme(),
            self.url.host_str().unwrap_or("unknown-host")
        )
    }

    async fn fetch(&self) -> AppResult<String> {
        debug!("Fetching feed from {}", self.describe());

        let response = self.client.get(self.url.clone()).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(fetch_error(&format!(
                "Failed to fetch feed from {}: HTTP {}",
                self.describe(),
                status
            )));
        }

        let body = response.text().await?;
        info!("Fetched {} bytes from {}", body.len(), self.describe());
        Ok(body)
    }
}
