use std::time::Duration;

#[derive(Debug)]
pub enum GenerationError {
    /// Request never produced a response
    Network(String),
    /// No response within the configured limit
    Timeout(Duration),
    /// Backend answered with a non-success status
    Api { status: u16, body: String },
    /// Response body could not be decoded
    InvalidResponse(String),
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationError::Network(msg) => write!(f, "request to model failed: {msg}"),
            GenerationError::Timeout(limit) => {
                write!(f, "model did not respond within {}s", limit.as_secs())
            }
            GenerationError::Api { status, body } => {
                write!(f, "model API error {status}: {body}")
            }
            GenerationError::InvalidResponse(msg) => {
                write!(f, "invalid response from model: {msg}")
            }
        }
    }
}

impl std::error::Error for GenerationError {}
