//! Text-to-SQL generator — converts natural language to SQL via any LlmProvider.

use crate::ai::prompt;
use crate::ai::provider::LlmProvider;
use crate::error::ConvertError;
use std::sync::Arc;

/// Single entry point for conversions. Built once at startup; `None` means no
/// credential was configured and every call fails with
/// [`ConvertError::Configuration`] until the operator restarts with
/// `GROQ_API_KEY` set.
pub struct SqlGenerator {
    provider: Option<Arc<dyn LlmProvider>>,
}

impl SqlGenerator {
    pub fn new(provider: Option<Arc<dyn LlmProvider>>) -> Self {
        Self { provider }
    }

    /// Translate a natural language question to SQL.
    ///
    /// The model output is passed through verbatim apart from whitespace
    /// trimming. That includes the literal sentence the prompt tells the
    /// model to answer with for off-topic questions; callers see exactly
    /// what the model said.
    pub async fn generate(&self, question: &str) -> Result<String, ConvertError> {
        let provider = self.provider.as_ref().ok_or(ConvertError::Configuration)?;
        let prompt = prompt::build_prompt(question);
        let raw = provider.complete(&prompt).await?;
        Ok(raw.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockLlm(String);

    #[async_trait]
    impl LlmProvider for MockLlm {
        async fn complete(&self, _p: &str) -> Result<String, ConvertError> {
            Ok(self.0.clone())
        }
        fn name(&self) -> &str { "mock" }
    }

    struct RecordingLlm {
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl LlmProvider for RecordingLlm {
        async fn complete(&self, p: &str) -> Result<String, ConvertError> {
            self.prompts.lock().unwrap().push(p.to_string());
            Ok("SELECT 1".to_string())
        }
        fn name(&self) -> &str { "mock" }
    }

    #[tokio::test]
    async fn test_generate_basic() {
        let generator = SqlGenerator::new(Some(Arc::new(MockLlm(
            "SELECT * FROM transactions".to_string(),
        ))));
        let sql = generator.generate("show all transactions").await.unwrap();
        assert_eq!(sql, "SELECT * FROM transactions");
    }

    #[tokio::test]
    async fn test_generate_trims_whitespace() {
        let generator = SqlGenerator::new(Some(Arc::new(MockLlm(
            "\n  SELECT Amount FROM transactions  \n".to_string(),
        ))));
        let sql = generator.generate("amounts").await.unwrap();
        assert_eq!(sql, "SELECT Amount FROM transactions");
    }

    #[tokio::test]
    async fn test_generate_passes_off_topic_answer_through() {
        let generator = SqlGenerator::new(Some(Arc::new(MockLlm(
            prompt::OFF_TOPIC_ANSWER.to_string(),
        ))));
        let out = generator.generate("what is the weather today?").await.unwrap();
        assert_eq!(out, prompt::OFF_TOPIC_ANSWER);
    }

    #[tokio::test]
    async fn test_generate_without_provider_fails_with_configuration() {
        let generator = SqlGenerator::new(None);
        let err = generator.generate("anything").await.unwrap_err();
        assert!(matches!(err, ConvertError::Configuration));
    }

    #[tokio::test]
    async fn test_generate_builds_schema_prompt() {
        let recorder = Arc::new(RecordingLlm { prompts: Mutex::new(Vec::new()) });
        let generator = SqlGenerator::new(Some(recorder.clone()));
        generator.generate("How much did I spend on drinks last month?").await.unwrap();

        let prompts = recorder.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains(prompt::TABLE_SCHEMA));
        assert!(prompts[0].contains("How much did I spend on drinks last month?"));
    }
}
