use async_trait::async_trait;
use feed_rs::model::Entry;
use reqwest::Client;
use tf_core::{Error, FeedReader, RawEntry, Result};
use tracing::debug;

/// Parse an RSS, Atom or JSON Feed document into entries, keeping document
/// order.
pub fn parse_feed(raw: &[u8]) -> Result<Vec<RawEntry>> {
    let feed = feed_rs::parser::parse(raw)
        .map_err(|e| Error::Feed(format!("failed to parse feed: {}", e)))?;
    Ok(feed.entries.iter().map(entry_from_feed).collect())
}

fn entry_from_feed(entry: &Entry) -> RawEntry {
    RawEntry {
        title: entry
            .title
            .as_ref()
            .map(|text| text.content.clone())
            .unwrap_or_default(),
        link: entry
            .links
            .first()
            .map(|link| link.href.clone())
            .unwrap_or_default(),
        summary: entry.summary.as_ref().map(|text| text.content.clone()),
        description: entry.content.as_ref().and_then(|content| content.body.clone()),
    }
}

/// Sent with every outbound request.
pub const USER_AGENT: &str = concat!("tagfeed/", env!("CARGO_PKG_VERSION"));

/// HTTP client shared by the feed reader and the model backends.
pub fn http_client() -> Result<Client> {
    Ok(Client::builder().user_agent(USER_AGENT).build()?)
}

/// Fetches feeds over HTTP with a shared client.
#[derive(Debug, Clone)]
pub struct HttpFeedReader {
    client: Client,
}

impl HttpFeedReader {
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FeedReader for HttpFeedReader {
    async fn fetch_entries(&self, url: &str) -> Result<Vec<RawEntry>> {
        let response = self.client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Feed(format!("request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Feed(format!("{} returned {}", url, status)));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Feed(format!("failed to read {}: {}", url, e)))?;
        let entries = parse_feed(&body)?;
        debug!(url, entries = entries.len(), "📡 Feed fetched");
        Ok(entries)
    }
}
