//! Error taxonomy for the conversion pipeline.

use thiserror::Error;

/// Failures surfaced by `/convert`, mapped to an HTTP status exactly once at
/// the route boundary. Display strings double as the wire-visible `error`
/// messages, so they are part of the API contract.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("No text provided")]
    Validation,
    #[error("GROQ_API_KEY not configured")]
    Configuration,
    /// Provider-reported failure; carries the provider's own message.
    #[error("Groq API Error: {0}")]
    Upstream(String),
    /// Transport errors, ill-shaped responses, everything else.
    #[error("{0}")]
    Unexpected(String),
}

impl From<reqwest::Error> for ConvertError {
    fn from(e: reqwest::Error) -> Self {
        ConvertError::Unexpected(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_wire_messages() {
        assert_eq!(ConvertError::Validation.to_string(), "No text provided");
        assert_eq!(
            ConvertError::Configuration.to_string(),
            "GROQ_API_KEY not configured"
        );
        assert_eq!(
            ConvertError::Upstream("Rate limit reached".to_string()).to_string(),
            "Groq API Error: Rate limit reached"
        );
        assert_eq!(
            ConvertError::Unexpected("connection reset".to_string()).to_string(),
            "connection reset"
        );
    }
}
