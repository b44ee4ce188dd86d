use std::sync::Arc;
use ask_lib::ask_service::AskService;

#[derive(Clone, Debug)]
pub struct AppState {
    pub ask_service: Arc<AskService>,
    pub env: String,
}
