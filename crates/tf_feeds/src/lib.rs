pub mod clean;
pub mod normalizer;
pub mod reader;

pub use clean::clean_summary;
pub use normalizer::{ArticleNormalizer, MAX_ENTRIES};
pub use reader::{http_client, parse_feed, HttpFeedReader};

pub mod prelude {
    pub use super::normalizer::ArticleNormalizer;
    pub use super::reader::HttpFeedReader;
    pub use tf_core::{Article, Result, Error};
}
