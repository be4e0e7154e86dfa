pub(crate) mod generate;
pub(crate) mod health;

use axum::{
    Router,
    routing::{get, post},
};
use codegen_openai::CompletionsClient;

use crate::config::CodegenConfig;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: CodegenConfig,
    pub(crate) client: CompletionsClient,
}

pub fn router(config: CodegenConfig) -> Router {
    let state = AppState {
        client: CompletionsClient::new(config.base_url.clone()),
        config,
    };

    Router::new()
        .route("/", get(health::handler))
        .route("/generate", post(generate::handler))
        .with_state(state)
}
