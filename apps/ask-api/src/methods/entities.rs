use ask_lib::entities::Answer;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /api/ask`. `question` stays optional so a missing or
/// null field is reported with the API's own message.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AskRequest {
    #[schema(example = "What documents do I need to travel from Kenya to Ireland?")]
    pub question: Option<String>,
}

impl AskRequest {
    /// Lenient parse: anything that isn't a JSON object with a string
    /// `question` yields `None`.
    pub fn question_from_body(body: &[u8]) -> Option<String> {
        let value = serde_json::from_slice::<serde_json::Value>(body).ok()?;
        if !value.is_object() {
            return None;
        }
        serde_json::from_value::<AskRequest>(value)
            .ok()
            .and_then(|req| req.question)
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AskResponse {
    #[schema(example = "### Required documents\n- Passport ...")]
    pub answer: String,
    #[schema(example = "gemini-pro")]
    pub model: String,
}

impl From<Answer> for AskResponse {
    fn from(answer: Answer) -> Self {
        AskResponse {
            answer: answer.text,
            model: answer.model,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        HealthResponse {
            status: "ok".to_string(),
        }
    }
}
