use crate::entities::Answer;
use crate::errors_service::AskServiceError;
use crate::generation::traits::GenerationClientTrait;
use crate::prompt::build_prompt;
use std::sync::Arc;

/// Checks the raw `question` field and returns it trimmed.
pub fn validate_question(question: Option<&str>) -> Result<&str, AskServiceError> {
    let question = question.ok_or(AskServiceError::MissingQuestion)?.trim();
    if question.is_empty() {
        return Err(AskServiceError::EmptyQuestion);
    }
    Ok(question)
}

#[derive(Clone)]
pub struct AskService {
    client: Arc<dyn GenerationClientTrait>,
    model: String,
}

impl AskService {
    pub fn new<G>(client: G, model: impl Into<String>) -> Self
    where
        G: GenerationClientTrait + 'static,
    {
        Self::with_client(Arc::new(client), model)
    }

    pub fn with_client(client: Arc<dyn GenerationClientTrait>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Validates the question, sends it to the model and shapes the answer.
    ///
    /// Every call reaches the backend; nothing is memoized.
    pub async fn ask(&self, question: Option<&str>) -> Result<Answer, AskServiceError> {
        let question = validate_question(question)?;
        let prompt = build_prompt(question);

        tracing::debug!(
            model = %self.model(),
            question_len = question.len(),
            prompt_len = prompt.len(),
            "sending question to model"
        );

        let generated = self.client.generate(&self.model, &prompt).await?;
        if generated.is_none() {
            tracing::warn!(model = %self.model(), "model returned no text");
        }

        Ok(Answer::from_generated(generated, self.model()))
    }
}

impl std::fmt::Debug for AskService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AskService")
            .field("model", &self.model())
            .finish()
    }
}
