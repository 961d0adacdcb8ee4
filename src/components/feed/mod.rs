mod fetcher;

pub use fetcher::HttpFeedFetcher;

use crate::error::AppResult;
use async_trait::async_trait;

/// Source of raw ICS feed content
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Where the feed comes from, for logging
    fn describe(&self) -> String;

    /// Retrieve the whole feed as text
    async fn fetch(&self) -> AppResult<String>;
}
