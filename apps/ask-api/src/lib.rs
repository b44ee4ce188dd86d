pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod gemini;
pub mod methods;
pub mod middleware;
pub mod shutdown;
pub mod state;

pub use app::{build_app, ApiDoc};
pub use state::AppState;
