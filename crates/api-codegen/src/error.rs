use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::credential::CredentialError;

pub const INVALID_API_KEY_DETAIL: &str = "Invalid or missing API key.";

pub type Result<T> = std::result::Result<T, CodegenError>;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("{0}")]
    Validation(String),

    #[error("Invalid or missing API key.")]
    MissingCredential(#[from] CredentialError),

    #[error("Upstream completion request failed: {0}")]
    Upstream(#[from] codegen_openai::Error),

    #[error("Upstream completion request timed out")]
    Timeout,
}

impl IntoResponse for CodegenError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(msg) => {
                tracing::debug!(detail = %msg, "request_validation_failed");
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::MissingCredential(e) => {
                tracing::warn!(error = %e, "credential_resolution_failed");
                StatusCode::BAD_REQUEST
            }
            Self::Upstream(e) => {
                let upstream_status = e.upstream_status();
                tracing::error!(
                    error = %e,
                    upstream_status = ?upstream_status,
                    "upstream_request_failed"
                );
                sentry::configure_scope(|scope| {
                    match upstream_status {
                        Some(code) => scope.set_tag("upstream.status", code.to_string()),
                        None => scope.set_tag("upstream.status", "unknown"),
                    }
                });
                StatusCode::BAD_GATEWAY
            }
            Self::Timeout => {
                tracing::error!("upstream_request_timeout");
                sentry::configure_scope(|scope| {
                    scope.set_tag("upstream.status", "timeout");
                });
                StatusCode::GATEWAY_TIMEOUT
            }
        };

        let body = Json(ErrorResponse {
            detail: self.to_string(),
        });
        (status, body).into_response()
    }
}
