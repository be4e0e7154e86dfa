mod client;
mod error;
mod types;

pub use client::{CompletionsClient, DEFAULT_BASE_URL};
pub use error::Error;
pub use types::{Choice, CompletionRequest, CompletionResponse};
