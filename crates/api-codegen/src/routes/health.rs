use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

pub const HEALTH_MESSAGE: &str = "Code Generation API is running";

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/",
    operation_id = "health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse),
    ),
    tag = "codegen",
)]
pub async fn handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: HEALTH_MESSAGE.to_string(),
    })
}
