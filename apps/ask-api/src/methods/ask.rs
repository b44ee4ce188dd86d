use axum::{body::Bytes, extract::State, Json};

use crate::error::{handle_service_error, ApiError, ErrorResponse};
use crate::methods::entities::{AskRequest, AskResponse};
use crate::methods::routes::ASK_PATH;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = ASK_PATH,
    tag = "Q&A",
    summary = "Ask a question to Gemini LLM",
    request_body(content = AskRequest, content_type = "application/json"),
    responses(
        (status = 200, description = "AI-generated response", body = AskResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 403, description = "Origin not allowed", body = ErrorResponse),
        (status = 500, description = "Server error", body = ErrorResponse),
    )
)]
pub async fn ask(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AskResponse>, ApiError> {
    let question = AskRequest::question_from_body(&body);
    let service = &state.ask_service;

    service
        .ask(question.as_deref())
        .await
        .map(|answer| Json(AskResponse::from(answer)))
        .map_err(|e| handle_service_error(e, &state.env, service.model()))
}
