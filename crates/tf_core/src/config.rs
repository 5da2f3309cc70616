use std::collections::BTreeMap;
use url::Url;
use crate::{Error, Result};

/// Category used when a request does not name one.
pub const DEFAULT_CATEGORY: &str = "economy";

const DEFAULT_FEEDS: &[(&str, &str)] = &[
    ("economy", "https://news.yahoo.co.jp/rss/categories/business.xml"),
    ("gourmet", "https://news.google.com/rss/search?q=グルメ&hl=ja&gl=JP&ceid=JP:ja"),
    ("health", "https://news.google.com/rss/search?q=健康&hl=ja&gl=JP&ceid=JP:ja"),
];

/// Mapping from category key to feed URL. Built once at startup and shared
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedCatalog {
    feeds: BTreeMap<String, String>,
}

impl FeedCatalog {
    pub fn empty() -> Self {
        Self {
            feeds: BTreeMap::new(),
        }
    }

    /// Add or replace a category. The URL must be absolute.
    pub fn insert(&mut self, category: &str, url: &str) -> Result<()> {
        let category = category.trim();
        if category.is_empty() {
            return Err(Error::Config("category key must not be empty".to_string()));
        }
        let parsed = Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{}: {}", url, e)))?;
        self.feeds.insert(category.to_string(), parsed.to_string());
        Ok(())
    }

    pub fn with_feed(mut self, category: &str, url: &str) -> Result<Self> {
        self.insert(category, url)?;
        Ok(self)
    }

    pub fn get(&self, category: &str) -> Option<&str> {
        self.feeds.get(category).map(String::as_str)
    }

    /// Like [`get`](Self::get), but an unknown key is an error.
    pub fn resolve(&self, category: &str) -> Result<&str> {
        self.get(category)
            .ok_or_else(|| Error::UnknownCategory(category.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.feeds.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.feeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.feeds.is_empty()
    }
}

impl Default for FeedCatalog {
    fn default() -> Self {
        Self {
            feeds: DEFAULT_FEEDS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}
