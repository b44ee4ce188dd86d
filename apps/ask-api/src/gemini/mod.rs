mod client;
mod config;
mod errors;
mod models;

pub use client::GeminiClient;
pub use config::GeminiConfig;
pub use errors::GeminiError;
pub use models::{GenerateContentRequest, GenerateContentResponse};
