//! AI layer — prompt construction, the LLM provider seam, and text-to-SQL.

pub mod groq;
pub mod prompt;
pub mod provider;
pub mod text_to_sql;

pub use provider::LlmProvider;
pub use text_to_sql::SqlGenerator;

use crate::config::GroqConfig;
use groq::GroqProvider;
use std::sync::Arc;

/// Wire the generator from configuration. A missing credential yields a
/// generator with no provider rather than a startup failure; conversions then
/// fail individually until the operator restarts with `GROQ_API_KEY` set.
pub fn generator_from_config(cfg: &GroqConfig) -> SqlGenerator {
    let provider = cfg.api_key.as_deref().map(|key| {
        Arc::new(GroqProvider::new(
            key,
            &cfg.model,
            &cfg.base_url,
            cfg.temperature,
            cfg.max_tokens,
        )) as Arc<dyn LlmProvider>
    });
    SqlGenerator::new(provider)
}
