use secrecy::Secret;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Secret<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn generate_content_url(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
}
