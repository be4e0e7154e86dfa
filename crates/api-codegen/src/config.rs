use std::sync::Arc;
use std::time::Duration;

use codegen_openai::DEFAULT_BASE_URL;

use crate::credential::CredentialResolver;
use crate::env::ConfigSource;

pub const DEFAULT_MODEL: &str = "code-davinci-002";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Clone)]
pub struct CodegenConfig {
    pub credentials: CredentialResolver,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl CodegenConfig {
    pub fn new(source: Arc<dyn ConfigSource>) -> Self {
        Self {
            credentials: CredentialResolver::new(source),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
