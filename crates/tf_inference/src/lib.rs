use std::fmt;

pub mod models;
pub mod tags;

pub const DEFAULT_BACKEND: &str = "gemini";
pub const DEFAULT_MODEL_NAME: &str = "gemini-2.5-flash-lite";

#[derive(Clone)]
pub struct Config {
    /// Backend name understood by [`create_model`]
    pub backend: String,
    pub api_key: Option<String>,
    pub model_name: Option<String>,
    /// Overrides the backend's default base URL
    pub model_url: Option<String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("backend", &self.backend)
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("model_name", &self.model_name)
            .field("model_url", &self.model_url)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: DEFAULT_BACKEND.to_string(),
            api_key: None,
            model_name: None,
            model_url: None,
        }
    }
}

pub mod prelude {
    pub use super::Config;
    pub use super::models::create_model;
    pub use super::tags::{TagGenerator, PLACEHOLDER_TAG};
    pub use tf_core::{InferenceModel, Result, Error};
}

pub use models::create_model;
pub use tags::{parse_tags, TagGenerator, PLACEHOLDER_TAG};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_api_key() {
        let config = Config {
            api_key: Some("secret-key".to_string()),
            ..Default::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("<redacted>"));
    }
}
