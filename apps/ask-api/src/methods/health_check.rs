use axum::Json;

use crate::methods::entities::HealthResponse;
use crate::methods::routes::HEALTH_PATH;

#[utoipa::path(
    get,
    path = HEALTH_PATH,
    tag = "Health",
    summary = "Health check endpoint",
    responses(
        (status = 200, description = "Returns OK status", body = HealthResponse),
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
