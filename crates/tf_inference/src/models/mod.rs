use reqwest::Client;
use std::sync::Arc;
use tf_core::{Error, InferenceModel, Result};
use crate::Config;

pub mod dummy;
pub mod gemini;

use dummy::DummyModel;
use gemini::GeminiModel;

/// Build the inference backend named in `config.backend`. Network backends
/// send their requests through `client`.
pub fn create_model(client: Client, config: Config) -> Result<Arc<dyn InferenceModel>> {
    match config.backend.to_lowercase().as_str() {
        "gemini" => Ok(Arc::new(GeminiModel::with_client(client, config)?)),
        "dummy" => Ok(Arc::new(DummyModel::new())),
        other => Err(Error::Config(format!(
            "unknown inference backend '{}' (available: gemini, dummy)",
            other
        ))),
    }
}
