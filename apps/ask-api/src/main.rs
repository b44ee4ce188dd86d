use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use ask_api::build_app;
use ask_api::config::{AppConfig, MiddlewareConfig};
use ask_api::constants::{ENV, LOCAL_ENV, SERVICE};
use ask_api::gemini::GeminiClient;
use ask_api::methods::routes::SERVICE_DOCS_PATH;
use ask_api::shutdown::{serve_with_drain_deadline, shutdown_signal, ShutdownOutcome};
use ask_api::state::AppState;
use ask_lib::ask_service::AskService;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(env: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);

    let json_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true);

    if env == LOCAL_ENV {
        let pretty_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .pretty();
        registry.with(json_layer).with(pretty_layer).init();
    } else {
        registry.with(json_layer).init();
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine; real environment variables still apply
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    let env = std::env::var(ENV).unwrap_or_else(|_| LOCAL_ENV.to_string());
    init_tracing(&env);
    tracing::info!(service = SERVICE, env = %env, dotenv_loaded, "tracing initialized");

    let config = AppConfig::from_env()?;
    let middleware_config = MiddlewareConfig::from_env();
    tracing::info!(
        model = %config.gemini.model,
        gemini_base_url = %config.gemini.base_url,
        gemini_timeout_secs = config.gemini.timeout.as_secs(),
        request_timeout_secs = middleware_config.request_timeout.as_secs(),
        max_body_size = middleware_config.max_body_size,
        cors_origins = ?middleware_config.cors_allowed_origins,
        "configuration loaded"
    );
    if middleware_config.cors_allowed_origins.is_empty() {
        tracing::info!("no allowed origins configured, cross-origin requests will be rejected");
    }

    let model = config.gemini.model.clone();
    let client = GeminiClient::new(config.gemini)?;

    let app_state = AppState {
        ask_service: Arc::new(AskService::new(client, model)),
        env: config.env,
    };

    let app = build_app(app_state, &middleware_config);

    let addr = SocketAddr::new(config.host, config.port);
    let public_url = format!("http://127.0.0.1:{}", config.port);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    tracing::info!("{} is ready to accept requests at: {}", SERVICE, public_url);
    tracing::info!("API docs available at: {}{}", public_url, SERVICE_DOCS_PATH);

    let outcome = serve_with_drain_deadline(
        listener,
        app,
        shutdown_signal(),
        middleware_config.shutdown_timeout,
    )
    .await
    .map_err(|e| format!("Server error: {}", e))?;

    if outcome == ShutdownOutcome::DeadlineExceeded {
        tracing::warn!("{} stopped with requests still in flight", SERVICE);
    } else {
        tracing::info!("{} stopped", SERVICE);
    }

    Ok(())
}
