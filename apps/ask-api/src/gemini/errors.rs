use std::fmt;
use std::time::Duration;

use ask_lib::generation::GenerationError;

#[derive(Debug)]
pub enum GeminiError {
    /// HTTP client could not be built
    Client(String),
    /// HTTP request failed before a response arrived
    RequestFailed(String),
    /// No response within the configured timeout
    Timeout(Duration),
    /// Gemini answered with a non-success status
    Api { status: u16, body: String },
    /// Invalid response from Gemini
    InvalidResponse(String),
}

impl fmt::Display for GeminiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeminiError::Client(msg) => write!(f, "failed to create gemini client: {msg}"),
            GeminiError::RequestFailed(msg) => write!(f, "gemini request failed: {msg}"),
            GeminiError::Timeout(limit) => {
                write!(f, "gemini did not respond within {}s", limit.as_secs())
            }
            GeminiError::Api { status, body } => write!(f, "gemini API error {status}: {body}"),
            GeminiError::InvalidResponse(msg) => write!(f, "invalid response from gemini: {msg}"),
        }
    }
}

impl std::error::Error for GeminiError {}

impl From<GeminiError> for GenerationError {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::Client(msg) | GeminiError::RequestFailed(msg) => GenerationError::Network(msg),
            GeminiError::Timeout(limit) => GenerationError::Timeout(limit),
            GeminiError::Api { status, body } => GenerationError::Api { status, body },
            GeminiError::InvalidResponse(msg) => GenerationError::InvalidResponse(msg),
        }
    }
}
