use axum::{
    http::{header, HeaderName, Method, StatusCode},
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::MiddlewareConfig;
use crate::error::{ApiError, ErrorResponse};
use crate::methods::ask::ask;
use crate::methods::entities::{AskRequest, AskResponse, HealthResponse};
use crate::methods::health_check::health_check;
use crate::methods::routes::{ASK_PATH, HEALTH_PATH, OPENAPI_JSON_PATH, SERVICE_DOCS_PATH};
use crate::middleware::origin_filter::{origin_filter_middleware, OriginFilterConfig};
use crate::state::AppState;

const X_REQUEST_ID: &str = "x-request-id";

#[derive(OpenApi)]
#[openapi(
    info(title = "LLM Q&A API", description = "Travel document questions answered by Gemini"),
    paths(
        crate::methods::health_check::health_check,
        crate::methods::ask::ask
    ),
    components(schemas(AskRequest, AskResponse, HealthResponse, ErrorResponse)),
    tags(
        (name = "Health", description = "Liveness probe"),
        (name = "Q&A", description = "Question answering")
    )
)]
pub struct ApiDoc;

async fn not_found() -> ApiError {
    ApiError::route_not_found()
}

fn cors_layer(config: &MiddlewareConfig) -> CorsLayer {
    let allow_origin = if config.allows_any_origin() {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<_> = config
            .cors_allowed_origins
            .iter()
            .filter_map(|o| match o.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %o, "ignoring invalid origin in configuration");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(X_REQUEST_ID)])
}

/// Builds the full application: `/api` routes behind the origin filter and
/// CORS, docs at the root, and the shared middleware stack around both.
pub fn build_app(state: AppState, config: &MiddlewareConfig) -> Router {
    let origin_filter = OriginFilterConfig::new(&config.cors_allowed_origins);

    // Origin filter runs before CORS so rejected preflights never get headers
    let api_routes = Router::new()
        .route(HEALTH_PATH, get(health_check))
        .route(ASK_PATH, post(ask))
        .layer(cors_layer(config))
        .layer(from_fn_with_state(origin_filter, origin_filter_middleware))
        .with_state(state);

    let mut app = Router::new()
        .merge(api_routes)
        .merge(SwaggerUi::new(SERVICE_DOCS_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
        .fallback(not_found);

    // Order: Request → Timeout → Body Limit → Request ID → Trace → Handler
    app = app.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(tracing::Level::DEBUG))
            .on_response(DefaultOnResponse::new().level(tracing::Level::DEBUG)),
    );

    let x_request_id = HeaderName::from_static(X_REQUEST_ID);
    app = app
        .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
        .layer(SetRequestIdLayer::new(x_request_id, MakeRequestUuid));

    app = app.layer(RequestBodyLimitLayer::new(config.max_body_size));

    app.layer(TimeoutLayer::with_status_code(
        StatusCode::REQUEST_TIMEOUT,
        config.request_timeout,
    ))
}
