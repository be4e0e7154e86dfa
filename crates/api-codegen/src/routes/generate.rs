use std::time::Instant;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::AppState;
use crate::credential::KeySelector;
use crate::error::{CodegenError, ErrorResponse, Result};
use crate::prompt::completion_request;

#[derive(Debug, Deserialize, ToSchema)]
pub struct GenerateRequest {
    pub prompt: String,
    pub language: String,
    /// `key1`, `key2`, `key3`, or anything else for the configured default.
    #[serde(default = "default_api_key_type")]
    #[schema(default = "default")]
    pub api_key_type: String,
}

fn default_api_key_type() -> String {
    KeySelector::Fallback.to_string()
}

impl GenerateRequest {
    pub fn validate(&self) -> Result<()> {
        if self.prompt.is_empty() {
            return Err(CodegenError::Validation("prompt must not be empty".into()));
        }
        if self.language.is_empty() {
            return Err(CodegenError::Validation("language must not be empty".into()));
        }
        Ok(())
    }

    pub fn key_selector(&self) -> KeySelector {
        KeySelector::from_api_key_type(&self.api_key_type)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GenerateResponse {
    pub response: String,
}

#[utoipa::path(
    post,
    path = "/generate",
    operation_id = "generate_code",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Generated code", body = GenerateResponse),
        (status = 400, description = "Invalid or missing API key", body = ErrorResponse),
        (status = 422, description = "Malformed request body", body = ErrorResponse),
        (status = 502, description = "Completion API failed", body = ErrorResponse),
        (status = 504, description = "Completion API timed out", body = ErrorResponse),
    ),
    tag = "codegen",
)]
pub async fn handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>> {
    let Json(request) = payload.map_err(|e| CodegenError::Validation(e.body_text()))?;
    request.validate()?;

    let selector = request.key_selector();
    let api_key = state.config.credentials.resolve(selector)?;

    tracing::info!(
        language = %request.language,
        key_selector = %selector,
        prompt_len = request.prompt.len(),
        model = %state.config.model,
        "code_generation_request_received"
    );

    sentry::configure_scope(|scope| {
        scope.set_tag("codegen.language", &request.language);
        scope.set_tag("codegen.key_selector", selector.to_string());
        scope.set_tag("codegen.model", &state.config.model);
    });

    let completion = completion_request(&state.config.model, &request.language, &request.prompt);
    let start_time = Instant::now();

    let text = tokio::time::timeout(
        state.config.timeout,
        state.client.complete_text(api_key.expose(), &completion),
    )
    .await
    .map_err(|_| CodegenError::Timeout)??;

    tracing::info!(
        latency_ms = start_time.elapsed().as_millis() as u64,
        response_len = text.len(),
        "code_generation_completed"
    );

    Ok(Json(GenerateResponse { response: text }))
}
