use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;

use ask_lib::generation::{GenerationClientTrait, GenerationError};

use super::config::GeminiConfig;
use super::errors::GeminiError;
use super::models::{GenerateContentRequest, GenerateContentResponse};

const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiClient {
    config: GeminiConfig,
    http: Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, GeminiError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GeminiError::Client(e.to_string()))?;

        Ok(Self { config, http })
    }

    fn map_send_error(&self, err: reqwest::Error) -> GeminiError {
        if err.is_timeout() {
            GeminiError::Timeout(self.config.timeout)
        } else {
            GeminiError::RequestFailed(err.to_string())
        }
    }

    /// Call `generateContent` once and decode the response envelope.
    pub async fn generate_content(
        &self,
        model: &str,
        prompt: &str,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let response = self
            .http
            .post(self.config.generate_content_url(model))
            .header(API_KEY_HEADER, self.config.api_key.expose_secret())
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<unreadable body: {e}>"));
            return Err(GeminiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await.map_err(|e| self.map_send_error(e))?;
        serde_json::from_slice::<GenerateContentResponse>(&body)
            .map_err(|e| GeminiError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl GenerationClientTrait for GeminiClient {
    async fn generate(&self, model: &str, prompt: &str) -> Result<Option<String>, GenerationError> {
        let response = self.generate_content(model, prompt).await?;

        if let Some(reason) = response
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
        {
            tracing::warn!(model = %model, block_reason = %reason, "gemini blocked the prompt");
        }

        Ok(response.text())
    }
}
