mod config;
mod credential;
mod env;
mod error;
mod openapi;
mod prompt;
mod routes;

pub use config::*;
pub use credential::{ApiKey, CredentialError, CredentialResolver, KeySelector};
pub use env::{
    ConfigSource, DEFAULT_KEY_VAR, EnvSnapshot, OPENAI_API_KEY_1_VAR, OPENAI_API_KEY_2_VAR,
    OPENAI_API_KEY_3_VAR,
};
pub use error::{CodegenError, ErrorResponse, INVALID_API_KEY_DETAIL};
pub use openapi::openapi;
pub use prompt::{MAX_TOKENS, compose_prompt, completion_request};
pub use routes::generate::{GenerateRequest, GenerateResponse};
pub use routes::health::{HEALTH_MESSAGE, HealthResponse};
pub use routes::router;
