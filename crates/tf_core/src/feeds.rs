use async_trait::async_trait;
use crate::types::RawEntry;
use crate::Result;

#[async_trait]
pub trait FeedReader: Send + Sync {
    /// Fetch a feed and return its entries in document order
    async fn fetch_entries(&self, url: &str) -> Result<Vec<RawEntry>>;
}
