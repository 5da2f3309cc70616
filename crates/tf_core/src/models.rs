use async_trait::async_trait;
use crate::Result;

#[async_trait]
pub trait InferenceModel: Send + Sync {
    /// Short human-readable backend name, used in logs
    fn name(&self) -> &str;

    /// Send a single prompt and return the model's free-text reply
    async fn generate(&self, prompt: &str) -> Result<String>;
}
