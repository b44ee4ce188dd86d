use async_trait::async_trait;

use crate::generation::errors::GenerationError;

/// A remote text-generation backend.
#[async_trait]
pub trait GenerationClientTrait: Send + Sync {
    /// Sends one prompt to `model` and returns the generated text, `None`
    /// when the backend answered without any text.
    async fn generate(&self, model: &str, prompt: &str) -> Result<Option<String>, GenerationError>;
}
