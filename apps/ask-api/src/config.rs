use secrecy::Secret;
use std::net::IpAddr;
use std::time::Duration;

use crate::constants::{
    ALLOWED_ORIGINS, ASK_API_HOST, ASK_API_PORT, DEFAULT_GEMINI_API_BASE_URL,
    DEFAULT_GEMINI_MODEL, ENV, GEMINI_API_BASE_URL, GEMINI_API_KEY, GEMINI_MODEL,
    GEMINI_TIMEOUT_SECS, LOCAL_ENV, MAX_BODY_SIZE_BYTES, REQUEST_TIMEOUT_SECS,
    SHUTDOWN_TIMEOUT_SECS,
};
use crate::gemini::GeminiConfig;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable must be set")]
    MissingVar(&'static str),

    #[error("invalid value for {var}: {value}")]
    InvalidValue { var: &'static str, value: String },
}

/// Split a comma-separated origin list, trimming entries and dropping empty ones.
pub fn parse_origin_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Parse an optional positive number of seconds, warning and falling back on bad input.
fn parse_secs<F>(lookup: &F, var: &'static str, default: u64) -> Duration
where
    F: Fn(&str) -> Option<String>,
{
    let secs = match lookup(var) {
        None => default,
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => secs,
            _ => {
                tracing::warn!(env_var = var, value = %raw, default, "ignoring invalid duration");
                default
            }
        },
    };
    Duration::from_secs(secs)
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub host: IpAddr,
    pub port: u16,
    pub gemini: GeminiConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(GEMINI_API_KEY)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingVar(GEMINI_API_KEY))?;

        let model = lookup(GEMINI_MODEL)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());

        let base_url = lookup(GEMINI_API_BASE_URL)
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE_URL.to_string());

        let timeout = parse_secs(&lookup, GEMINI_TIMEOUT_SECS, 60);

        let host = match lookup(ASK_API_HOST) {
            Some(raw) => raw.trim().parse::<IpAddr>().map_err(|_| ConfigError::InvalidValue {
                var: ASK_API_HOST,
                value: raw.clone(),
            })?,
            None => IpAddr::from([0, 0, 0, 0]),
        };

        let port = match lookup(ASK_API_PORT) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: ASK_API_PORT,
                value: raw.clone(),
            })?,
            None => 8000,
        };

        Ok(Self {
            env: lookup(ENV).unwrap_or_else(|| LOCAL_ENV.to_string()),
            host,
            port,
            gemini: GeminiConfig {
                api_key: Secret::new(api_key),
                model,
                base_url,
                timeout,
            },
        })
    }
}

#[derive(Debug, Clone)]
pub struct MiddlewareConfig {
    pub request_timeout: Duration,
    pub max_body_size: usize,
    pub shutdown_timeout: Duration,
    pub cors_allowed_origins: Vec<String>,
}

impl Default for MiddlewareConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(90),
            max_body_size: 65_536, // 64KB
            shutdown_timeout: Duration::from_secs(30),
            cors_allowed_origins: vec![],
        }
    }
}

impl MiddlewareConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();

        let max_body_size = match lookup(MAX_BODY_SIZE_BYTES) {
            None => default.max_body_size,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(bytes) if bytes > 0 => bytes,
                _ => {
                    tracing::warn!(
                        env_var = MAX_BODY_SIZE_BYTES,
                        value = %raw,
                        default = default.max_body_size,
                        "ignoring invalid body size"
                    );
                    default.max_body_size
                }
            },
        };

        let cors_allowed_origins = lookup(ALLOWED_ORIGINS)
            .map(|v| parse_origin_list(&v))
            .unwrap_or(default.cors_allowed_origins);

        Self {
            request_timeout: parse_secs(&lookup, REQUEST_TIMEOUT_SECS, default.request_timeout.as_secs()),
            max_body_size,
            shutdown_timeout: parse_secs(&lookup, SHUTDOWN_TIMEOUT_SECS, default.shutdown_timeout.as_secs()),
            cors_allowed_origins,
        }
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_allowed_origins.iter().any(|o| o == "*")
    }
}
