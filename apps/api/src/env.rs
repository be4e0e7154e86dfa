use std::sync::Arc;
use std::time::Duration;

use codegen_api::{CodegenConfig, ConfigSource};
use serde::Deserialize;

pub fn filter_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.is_empty()))
}

pub fn filter_empty_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    filter_empty(deserializer)?
        .map(|s| s.parse().map_err(serde::de::Error::custom))
        .transpose()
}

fn default_host() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    8000
}

fn default_allowed_origins() -> Vec<String> {
    vec!["*".into()]
}

/// Server settings. Credentials are read separately through a snapshot of
/// the whole environment since `DEFAULT_KEY` may name any variable.
#[derive(Debug, Deserialize)]
pub struct Env {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
    #[serde(default, deserialize_with = "filter_empty")]
    pub openai_base_url: Option<String>,
    #[serde(default, deserialize_with = "filter_empty")]
    pub codegen_model: Option<String>,
    #[serde(default, deserialize_with = "filter_empty_u64")]
    pub upstream_timeout_secs: Option<u64>,
    #[serde(default, deserialize_with = "filter_empty")]
    pub sentry_dsn: Option<String>,
}

impl Env {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn codegen_config(
        &self,
        source: Arc<dyn ConfigSource>,
    ) -> anyhow::Result<CodegenConfig> {
        let mut config = CodegenConfig::new(source);
        if let Some(base_url) = &self.openai_base_url {
            config = config.with_base_url(base_url.clone());
        }
        if let Some(model) = &self.codegen_model {
            config = config.with_model(model.clone());
        }
        if let Some(secs) = self.upstream_timeout_secs {
            anyhow::ensure!(secs > 0, "UPSTREAM_TIMEOUT_SECS must be greater than zero");
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }
}
