use serde::{Deserialize, Serialize};

/// Text returned when the model produced nothing usable.
pub const NO_RESPONSE_GENERATED: &str = "No response generated.";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
    pub model: String,
}

impl Answer {
    /// Shapes raw model output: trims it, or falls back to
    /// [`NO_RESPONSE_GENERATED`] when there is nothing left.
    pub fn from_generated(text: Option<String>, model: &str) -> Self {
        let text = text
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(NO_RESPONSE_GENERATED)
            .to_string();

        Answer {
            text,
            model: model.to_string(),
        }
    }
}
