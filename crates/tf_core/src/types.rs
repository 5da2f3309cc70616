use serde::{Deserialize, Serialize};

/// One entry as handed back by a feed reader, before any cleanup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    pub title: String,
    pub link: String,
    pub summary: Option<String>,
    pub description: Option<String>,
}

impl RawEntry {
    /// The text used for the article summary: `summary` when present,
    /// otherwise `description`, otherwise empty.
    pub fn summary_text(&self) -> &str {
        self.summary
            .as_deref()
            .or(self.description.as_deref())
            .unwrap_or_default()
    }
}

/// An enriched article as served to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub link: String,
    pub summary: String,
    pub tags: Vec<String>,
}
