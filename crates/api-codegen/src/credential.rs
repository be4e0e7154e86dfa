use std::fmt;
use std::sync::Arc;

use strum::IntoEnumIterator;
use thiserror::Error;

use crate::env::{
    ConfigSource, DEFAULT_KEY_VAR, OPENAI_API_KEY_1_VAR, OPENAI_API_KEY_2_VAR,
    OPENAI_API_KEY_3_VAR,
};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum KeySelector {
    #[strum(serialize = "key1")]
    Key1,
    #[strum(serialize = "key2")]
    Key2,
    #[strum(serialize = "key3")]
    Key3,
    #[default]
    #[strum(serialize = "default")]
    Fallback,
}

impl KeySelector {
    /// Anything other than `key1`..`key3` selects the fallback credential.
    pub fn from_api_key_type(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    pub fn variable(&self) -> Option<&'static str> {
        match self {
            Self::Key1 => Some(OPENAI_API_KEY_1_VAR),
            Self::Key2 => Some(OPENAI_API_KEY_2_VAR),
            Self::Key3 => Some(OPENAI_API_KEY_3_VAR),
            Self::Fallback => None,
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("configuration variable {variable} is missing or empty")]
    NotSet { variable: String },

    /// The target name is not echoed: operators sometimes put the secret itself in `DEFAULT_KEY`.
    #[error("variable named by DEFAULT_KEY is missing or empty")]
    DefaultTargetNotSet,
}

#[derive(Clone)]
pub struct CredentialResolver {
    source: Arc<dyn ConfigSource>,
}

impl CredentialResolver {
    pub fn new(source: Arc<dyn ConfigSource>) -> Self {
        Self { source }
    }

    pub fn resolve(&self, selector: KeySelector) -> Result<ApiKey, CredentialError> {
        match selector.variable() {
            Some(variable) => self.read(variable).map(ApiKey),
            None => {
                // DEFAULT_KEY names another variable; the credential is that variable's value.
                let target = self.read(DEFAULT_KEY_VAR)?;
                self.read(&target)
                    .map(ApiKey)
                    .map_err(|_| CredentialError::DefaultTargetNotSet)
            }
        }
    }

    pub fn configured_selectors(&self) -> Vec<KeySelector> {
        KeySelector::iter()
            .filter(|selector| self.resolve(*selector).is_ok())
            .collect()
    }

    pub fn log_configured_selectors(&self) {
        let selectors = self.configured_selectors();
        if selectors.is_empty() {
            tracing::error!("no_openai_credentials_configured");
        } else {
            let names: Vec<_> = selectors.iter().map(ToString::to_string).collect();
            tracing::info!(selectors = ?names, "openai_credentials_configured");
        }
    }

    fn read(&self, variable: &str) -> Result<String, CredentialError> {
        self.source
            .get(variable)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| CredentialError::NotSet {
                variable: variable.to_string(),
            })
    }
}
