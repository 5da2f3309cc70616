use std::sync::Arc;
use tf_feeds::ArticleNormalizer;

pub struct AppState {
    pub normalizer: Arc<ArticleNormalizer>,
}

impl AppState {
    pub fn new(normalizer: Arc<ArticleNormalizer>) -> Self {
        Self { normalizer }
    }
}
