pub const SERVICE: &str = "ask-api";
pub const ENV: &str = "ENV";

pub const LOCAL_ENV: &str = "local";

pub const ASK_API_HOST: &str = "ASK_API_HOST";
pub const ASK_API_PORT: &str = "ASK_API_PORT";

// Gemini configuration
pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
pub const GEMINI_MODEL: &str = "GEMINI_MODEL";
pub const GEMINI_API_BASE_URL: &str = "GEMINI_API_BASE_URL";
pub const GEMINI_TIMEOUT_SECS: &str = "GEMINI_TIMEOUT_SECS";

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-pro";
pub const DEFAULT_GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

// Middleware configuration
pub const ALLOWED_ORIGINS: &str = "ALLOWED_ORIGINS";
pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
pub const MAX_BODY_SIZE_BYTES: &str = "MAX_BODY_SIZE_BYTES";
pub const SHUTDOWN_TIMEOUT_SECS: &str = "SHUTDOWN_TIMEOUT_SECS";
