use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ask_lib::errors_service::AskServiceError;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Missing 'question'")]
    pub error: String,
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Forbidden(String),
    NotFound(String),
    Internal(String),
}

impl ApiError {
    pub fn origin_not_allowed() -> Self {
        ApiError::Forbidden("Origin not allowed".to_string())
    }

    pub fn route_not_found() -> Self {
        ApiError::NotFound("Not found".to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match self {
            ApiError::BadRequest(msg)
            | ApiError::Forbidden(msg)
            | ApiError::NotFound(msg)
            | ApiError::Internal(msg) => msg,
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

impl From<AskServiceError> for ApiError {
    fn from(err: AskServiceError) -> Self {
        if err.is_validation() {
            ApiError::BadRequest(err.to_string())
        } else {
            ApiError::Internal(err.to_string())
        }
    }
}

/// Converts a service error to an ApiError, logging upstream failures.
pub fn handle_service_error(err: AskServiceError, env: &str, model: &str) -> ApiError {
    if !err.is_validation() {
        tracing::error!(env = %env, model = %model, error = %err, "ask failed");
    }
    ApiError::from(err)
}
