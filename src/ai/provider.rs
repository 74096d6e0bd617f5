//! Core LLM provider trait.

use crate::error::ConvertError;
use async_trait::async_trait;

/// A provider that generates text completions (used for text-to-SQL).
/// The production implementation is [`GroqProvider`](crate::ai::groq::GroqProvider);
/// tests substitute mocks.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate a completion for the given prompt.
    async fn complete(&self, prompt: &str) -> Result<String, ConvertError>;
    /// Human-readable provider name for logs (e.g. "groq").
    fn name(&self) -> &str;
}
