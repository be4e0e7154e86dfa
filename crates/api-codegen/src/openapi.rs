use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::handler,
        crate::routes::generate::handler,
    ),
    components(schemas(
        crate::routes::generate::GenerateRequest,
        crate::routes::generate::GenerateResponse,
        crate::routes::health::HealthResponse,
        crate::error::ErrorResponse,
    )),
    tags((name = "codegen", description = "Code generation via a text-completion API"))
)]
pub struct ApiDoc;

pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
