use crate::generation::errors::GenerationError;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AskServiceError {
    #[error("Missing 'question'")]
    MissingQuestion,

    #[error("Question is empty")]
    EmptyQuestion,

    #[error(transparent)]
    Upstream(#[from] GenerationError),
}

impl AskServiceError {
    /// True for errors caused by the caller's input rather than the model.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AskServiceError::MissingQuestion | AskServiceError::EmptyQuestion
        )
    }
}
