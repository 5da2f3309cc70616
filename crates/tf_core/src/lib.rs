pub mod config;
pub mod error;
pub mod feeds;
pub mod models;
pub mod types;

pub use config::{FeedCatalog, DEFAULT_CATEGORY};
pub use error::{Error, Result};
pub use feeds::FeedReader;
pub use models::InferenceModel;
pub use types::{Article, RawEntry};
