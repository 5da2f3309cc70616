use std::fmt;
use tf_core::{InferenceModel, Result};

/// Offline backend. Replies with the first three words of the prompt's last
/// line, comma-separated, so the tag pipeline can run without network access.
pub struct DummyModel;

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").finish()
    }
}

impl DummyModel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DummyModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl InferenceModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let last_line = prompt.lines().last().unwrap_or_default();
        // Drop a leading "label:" if there is one
        let text = last_line
            .split_once(':')
            .map(|(_, rest)| rest)
            .unwrap_or(last_line);

        let words: Vec<&str> = text
            .split(|c: char| c.is_whitespace() || c.is_ascii_punctuation() || "、。「」".contains(c))
            .filter(|w| !w.is_empty())
            .take(3)
            .collect();
        Ok(words.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_dummy_model() {
        let model = DummyModel::new();

        let reply = model.generate("instructions\n\nタイトル: Stocks rally, yen slides again").await.unwrap();
        assert_eq!(reply, "Stocks,rally,yen");

        let reply = model.generate("日銀、利上げを決定").await.unwrap();
        assert_eq!(reply, "日銀,利上げを決定");

        let reply = model.generate("").await.unwrap();
        assert!(reply.is_empty());
    }
}
