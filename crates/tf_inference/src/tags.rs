//! Tag generation for article titles.
//!
//! A single prompt is sent per title and the free-text reply is reduced to at
//! most [`MAX_TAGS`] short tags. Failures never reach the caller: they are
//! logged and replaced by [`PLACEHOLDER_TAG`].

use std::sync::Arc;
use tf_core::InferenceModel;
use tracing::{debug, error};

/// Returned alone when the model call or reply handling fails.
pub const PLACEHOLDER_TAG: &str = "AIタグ生成中...";

pub const MAX_TAGS: usize = 3;

const BULLET_CHARS: &[char] = &['*', '-', '•', ' '];

const PROMPT_TEMPLATE: &str = "以下のニュースタイトルに対して、内容を表す具体的な名詞のタグを3つ生成してください。出力はカンマ区切り（例: スポーツ,サッカー,日本代表）のみにしてください。挨拶や説明など余計な文章は一切入れないでください。";

pub fn build_prompt(title: &str) -> String {
    format!("{}\n\nタイトル: {}", PROMPT_TEMPLATE, title)
}

/// Turn a model reply into at most three tags.
///
/// Newlines and ideographic commas count as separators, blank pieces are
/// skipped, and leading bullet markers are removed from each piece.
pub fn parse_tags(reply: &str) -> Vec<String> {
    reply
        .trim()
        .replace('\n', ",")
        .replace('、', ",")
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(|piece| piece.trim_start_matches(BULLET_CHARS))
        .filter(|tag| !tag.is_empty())
        .take(MAX_TAGS)
        .map(str::to_string)
        .collect()
}

pub struct TagGenerator {
    model: Arc<dyn InferenceModel>,
}

impl TagGenerator {
    pub fn new(model: Arc<dyn InferenceModel>) -> Self {
        Self { model }
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Tags for `title`. Always returns a usable list; on any model error the
    /// list is the single placeholder tag.
    pub async fn generate(&self, title: &str) -> Vec<String> {
        if title.trim().is_empty() {
            return Vec::new();
        }

        match self.model.generate(&build_prompt(title)).await {
            Ok(reply) => {
                let tags = parse_tags(&reply);
                debug!(title, ?tags, "🏷️ Tags generated");
                tags
            }
            Err(e) => {
                error!(title, model = self.model.name(), error = %e, "{} API error", self.model.name());
                vec![PLACEHOLDER_TAG.to_string()]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use async_trait::async_trait;
    use tf_core::{Error, Result};

    struct ScriptedModel {
        reply: String,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedModel {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl InferenceModel for ScriptedModel {
        fn name(&self) -> &str {
            "Scripted"
        }

        async fn generate(&self, prompt: &str) -> Result<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(self.reply.clone())
        }
    }

    struct FailingModel {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl InferenceModel for FailingModel {
        fn name(&self) -> &str {
            "Failing"
        }

        async fn generate(&self, _prompt: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(Error::Inference("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_parse_mixed_separators() {
        assert_eq!(
            parse_tags("スポーツ、サッカー\n日本代表"),
            vec!["スポーツ", "サッカー", "日本代表"]
        );
    }

    #[test]
    fn test_parse_bullet_list() {
        assert_eq!(parse_tags("- 経済\n- 株価\n- 円安"), vec!["経済", "株価", "円安"]);
        assert_eq!(parse_tags("• 医療\n* 健康\n  -- 睡眠"), vec!["医療", "健康", "睡眠"]);
    }

    #[test]
    fn test_parse_caps_at_three_and_keeps_order() {
        assert_eq!(parse_tags("a, b, c, d, e"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_only_strips_leading_markers() {
        assert_eq!(parse_tags("-ラーメン-店, 新宿 *"), vec!["ラーメン-店", "新宿 *"]);
    }

    #[test]
    fn test_parse_drops_empty_pieces() {
        assert_eq!(parse_tags(",,\n - ,経済,,"), vec!["経済"]);
        assert!(parse_tags("   ").is_empty());
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn test_parse_never_yields_bullets_or_blanks() {
        let replies = [
            "* a\n* b\n* c\n* d",
            "、、、",
            "•\n•x",
            "タグ: 経済、金融、政策、日銀",
            "\n\n- \n-  \n",
        ];
        for reply in replies {
            let tags = parse_tags(reply);
            assert!(tags.len() <= MAX_TAGS);
            for tag in &tags {
                assert!(!tag.trim().is_empty());
                assert!(!tag.starts_with(BULLET_CHARS));
            }
        }
    }

    #[test]
    fn test_prompt_embeds_title() {
        let prompt = build_prompt("円安が進行");
        assert!(prompt.starts_with(PROMPT_TEMPLATE));
        assert!(prompt.ends_with("\n\nタイトル: 円安が進行"));
    }

    #[tokio::test]
    async fn test_generate_parses_reply() {
        let model = Arc::new(ScriptedModel::new("  経済、株価\n円安\n日銀  "));
        let generator = TagGenerator::new(model.clone());

        let tags = generator.generate("円安が進行").await;
        assert_eq!(tags, vec!["経済", "株価", "円安"]);

        let prompts = model.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("タイトル: 円安が進行"));
    }

    #[tokio::test]
    async fn test_generate_falls_back_to_placeholder() {
        let model = Arc::new(FailingModel { calls: AtomicUsize::new(0) });
        let generator = TagGenerator::new(model.clone());

        assert_eq!(generator.generate("title").await, vec![PLACEHOLDER_TAG]);
        assert_eq!(generator.generate("another").await, vec![PLACEHOLDER_TAG]);
        assert_eq!(model.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_blank_title_skips_model() {
        let model = Arc::new(FailingModel { calls: AtomicUsize::new(0) });
        let generator = TagGenerator::new(model.clone());

        assert!(generator.generate("  ").await.is_empty());
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    }
}
