use std::sync::Arc;
use tf_core::{Article, FeedCatalog, FeedReader, RawEntry, Result};
use tf_inference::TagGenerator;
use tracing::info;
use crate::clean::clean_summary;

/// Only this many entries from the top of a feed are processed.
pub const MAX_ENTRIES: usize = 10;

/// Turns a category into enriched articles: resolve the feed, fetch it, then
/// clean and tag each of the first [`MAX_ENTRIES`] entries in order.
pub struct ArticleNormalizer {
    catalog: Arc<FeedCatalog>,
    reader: Arc<dyn FeedReader>,
    tags: TagGenerator,
}

impl ArticleNormalizer {
    pub fn new(catalog: Arc<FeedCatalog>, reader: Arc<dyn FeedReader>, tags: TagGenerator) -> Self {
        Self {
            catalog,
            reader,
            tags,
        }
    }

    pub fn tag_model_name(&self) -> &str {
        self.tags.model_name()
    }

    pub async fn normalize_entry(&self, entry: RawEntry) -> Article {
        let summary = clean_summary(entry.summary_text());
        let tags = self.tags.generate(&entry.title).await;
        Article {
            title: entry.title,
            link: entry.link,
            summary,
            tags,
        }
    }

    /// Unknown categories fail before anything is fetched.
    pub async fn articles_for(&self, category: &str) -> Result<Vec<Article>> {
        let url = self.catalog.resolve(category)?;
        info!(category, url, "📰 Fetching feed");

        let entries = self.reader.fetch_entries(url).await?;
        let total = entries.len();

        // Entries are tagged one at a time, in feed order
        let mut articles = Vec::with_capacity(total.min(MAX_ENTRIES));
        for entry in entries.into_iter().take(MAX_ENTRIES) {
            articles.push(self.normalize_entry(entry).await);
        }

        info!(category, total, processed = articles.len(), "✨ Articles ready");
        Ok(articles)
    }
}
