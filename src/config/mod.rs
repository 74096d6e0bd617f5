//! Config Module - Configuration management
//!
//! Loaded once at startup from an optional TOML file, then overlaid with
//! environment variables. The Groq credential is environment-only and never
//! read from (or written to) a config file.

use serde::{Deserialize, Serialize};

/// Main configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub groq: GroqConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GroqConfig {
    /// Environment-only; `#[serde(skip)]` keeps it out of TOML both ways.
    #[serde(skip)]
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl Default for GroqConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.groq.com/openai/v1".to_string(),
            model: "llama3-70b-8192".to_string(),
            temperature: 0.1,
            max_tokens: 500,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load from an optional TOML file (pure defaults when absent), then
    /// apply environment overrides.
    pub fn load(path: Option<&str>) -> Result<Self, String> {
        let mut config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .map_err(|e| format!("Failed to read config {}: {}", path, e))?;
                toml::from_str(&content).map_err(|e| format!("Invalid TOML in {}: {}", path, e))?
            }
            None => Config::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// Environment wins over the file. An empty `GROQ_API_KEY` counts as
    /// unset, so `GROQ_API_KEY= nl2sql serve` behaves like no key at all.
    pub fn apply_env(&mut self) {
        if let Ok(key) = std::env::var("GROQ_API_KEY") {
            if !key.is_empty() {
                self.groq.api_key = Some(key);
            }
        }
        if let Ok(model) = std::env::var("GROQ_MODEL") {
            if !model.is_empty() {
                self.groq.model = model;
            }
        }
        if let Ok(url) = std::env::var("GROQ_BASE_URL") {
            if !url.is_empty() {
                self.groq.base_url = url;
            }
        }
        if let Ok(level) = std::env::var("NL2SQL_LOG") {
            if !level.is_empty() {
                self.logging.level = level;
            }
        }
    }

    /// Validate config
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.server.port == 0 {
            errors.push("Invalid server port".to_string());
        }

        if self.groq.base_url.is_empty() {
            errors.push("groq.base_url must not be empty".to_string());
        }

        if self.groq.model.is_empty() {
            errors.push("groq.model must not be empty".to_string());
        }

        if !(0.0..=2.0).contains(&self.groq.temperature) {
            errors.push("groq.temperature must be between 0.0 and 2.0".to_string());
        }

        if self.groq.max_tokens == 0 {
            errors.push("groq.max_tokens must be > 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
