//! Groq provider (OpenAI-compatible chat completions, configurable base URL).

use crate::ai::prompt::SYSTEM_PROMPT;
use crate::ai::provider::LlmProvider;
use crate::error::ConvertError;
use async_trait::async_trait;
use serde_json::Value;

pub struct GroqProvider {
    pub model: String,
    pub base_url: String,
    pub temperature: f64,
    pub max_tokens: u32,
    api_key: String,
    client: reqwest::Client,
}

impl GroqProvider {
    pub fn new(api_key: &str, model: &str, base_url: &str, temperature: f64, max_tokens: u32) -> Self {
        Self {
            model: model.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            temperature,
            max_tokens,
            api_key: api_key.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// The exact JSON body sent to `/chat/completions`. Kept as a method so
    /// the request shape is testable without a network.
    pub fn request_body(&self, prompt: &str) -> Value {
        serde_json::json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": prompt}
            ],
            "temperature": self.temperature,
            "max_tokens": self.max_tokens
        })
    }

    pub fn parse_response(&self, json: &Value) -> Result<String, ConvertError> {
        json.pointer("/choices/0/message/content")
            .and_then(|v| v.as_str())
            .map(|s| s.trim().to_string())
            .ok_or_else(|| {
                ConvertError::Unexpected("Missing choices[0].message.content".to_string())
            })
    }

    /// Pull Groq's own message out of a non-2xx body. Groq wraps failures as
    /// `{"error": {"message": ...}}`; anything else falls back to the status
    /// line plus whatever text came back.
    pub fn parse_error_body(&self, status: reqwest::StatusCode, body: &str) -> String {
        serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| {
                v.pointer("/error/message")
                    .and_then(|m| m.as_str())
                    .map(|s| s.to_string())
            })
            .unwrap_or_else(|| {
                let body = body.trim();
                if body.is_empty() {
                    format!("HTTP {}", status)
                } else {
                    format!("HTTP {}: {}", status, body)
                }
            })
    }
}

#[async_trait]
impl LlmProvider for GroqProvider {
    async fn complete(&self, prompt: &str) -> Result<String, ConvertError> {
        let resp = self.client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&self.request_body(prompt))
            .send()
            .await
            .map_err(|e| ConvertError::Unexpected(format!("groq: {}", e)))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ConvertError::Upstream(self.parse_error_body(status, &body)));
        }

        let json: Value = resp.json().await?;
        self.parse_response(&json)
    }

    fn name(&self) -> &str { "groq" }
}
