use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::collections::HashSet;
use std::sync::Arc;

use crate::error::ApiError;

#[derive(Clone, Debug, Default)]
pub struct OriginFilterConfig {
    allowed: Arc<HashSet<String>>,
    allow_any: bool,
}

impl OriginFilterConfig {
    pub fn new(origins: &[String]) -> Self {
        Self {
            allowed: Arc::new(origins.iter().filter(|o| *o != "*").cloned().collect()),
            allow_any: origins.iter().any(|o| o == "*"),
        }
    }

    /// Allowed when listed, when `*` is configured, or when the origin
    /// names the host the request was sent to.
    ///
    /// The same-origin check compares the authority only. `Host` carries no
    /// scheme, and behind a TLS-terminating proxy the browser's `https` origin
    /// legitimately reaches this plain-HTTP listener, so `http://h` and
    /// `https://h` are both treated as same-origin for `Host: h`. Listed
    /// origins still match exactly, scheme included.
    pub fn is_allowed(&self, origin: &str, host: Option<&str>) -> bool {
        if self.allow_any || self.allowed.contains(origin) {
            return true;
        }

        match (origin_authority(origin), host) {
            (Some(authority), Some(host)) => authority.eq_ignore_ascii_case(host),
            _ => false,
        }
    }
}

/// `https://example.com:8443` -> `example.com:8443`
fn origin_authority(origin: &str) -> Option<&str> {
    let (_, rest) = origin.split_once("://")?;
    let authority = rest.trim_end_matches('/');
    (!authority.is_empty() && !authority.contains('/')).then_some(authority)
}

/// Rejects cross-origin requests from origins outside the allow-list.
/// Requests without an `Origin` header pass through untouched.
pub async fn origin_filter_middleware(
    State(config): State<OriginFilterConfig>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let headers = request.headers();
    let origin = headers.get(header::ORIGIN).and_then(|v| v.to_str().ok());

    if let Some(origin) = origin {
        let host = headers.get(header::HOST).and_then(|v| v.to_str().ok());

        if !config.is_allowed(origin, host) {
            tracing::warn!(origin = %origin, path = %request.uri().path(), "origin blocked by filter");
            return ApiError::origin_not_allowed().into_response();
        }
    }

    next.run(request).await
}
