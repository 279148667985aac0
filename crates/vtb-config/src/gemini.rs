//! Gemini reasoning backend configuration.

use serde::{Deserialize, Serialize};

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

/// Request timeout. Audit prompts carry whole workbooks, so completions can
/// take a while.
const fn default_timeout_secs() -> u64 {
    120
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminiConfig {
    /// API key for the Gemini API. Supplied externally — its absence is a
    /// startup precondition failure, not a pipeline concern.
    #[serde(default)]
    pub api_key: String,

    /// Model identifier to request completions from.
    #[serde(default = "default_model")]
    pub model: String,

    /// API endpoint base. Overridable so tests can point at a local stub.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl GeminiConfig {
    /// Whether the backend can be called at all.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeminiConfig::default();
        assert!(config.api_key.is_empty());
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.base_url, "https://generativelanguage.googleapis.com");
        assert_eq!(config.timeout_secs, 120);
        assert!(!config.is_configured());
    }

    #[test]
    fn whitespace_api_key_is_not_configured() {
        let config = GeminiConfig {
            api_key: "   ".to_string(),
            ..Default::default()
        };
        assert!(!config.is_configured());
    }
}
