//! Gemini `generateContent` client.

use std::time::Duration;

use vtb_config::GeminiConfig;

use crate::BackendError;
use crate::CompletionBackend;

/// Text-completion client for the Gemini REST API.
///
/// Single-shot, non-streaming: one `generateContent` POST per call, the full
/// candidate text extracted from the response. The configured timeout bounds
/// the whole request.
pub struct GeminiBackend {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl std::fmt::Debug for GeminiBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiBackend")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl GeminiBackend {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::MissingApiKey`] if no API key is configured,
    /// or [`BackendError::ClientBuild`] if the HTTP client cannot be
    /// constructed.
    pub fn new(config: &GeminiConfig) -> Result<Self, BackendError> {
        if !config.is_configured() {
            return Err(BackendError::MissingApiKey);
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| BackendError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            api_key: config.api_key.trim().to_string(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

impl CompletionBackend for GeminiBackend {
    async fn complete(&self, prompt: &str) -> Result<String, BackendError> {
        tracing::debug!(model = %self.model, prompt_bytes = prompt.len(), "dispatching completion request");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&serde_json::json!({
                "contents": [{"parts": [{"text": prompt}]}]
            }))
            .send()
            .await
            .map_err(|e| BackendError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), %message, "backend returned error status");
            return Err(BackendError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| BackendError::MalformedResponse(e.to_string()))?;

        let text = body["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| {
                BackendError::MalformedResponse(
                    "response missing 'candidates[0].content.parts[0].text'".to_string(),
                )
            })?;

        if text.is_empty() {
            return Err(BackendError::EmptyResponse);
        }
        Ok(text.to_string())
    }
}
