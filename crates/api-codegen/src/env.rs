use std::collections::HashMap;

pub const OPENAI_API_KEY_1_VAR: &str = "OPENAI_API_KEY_1";
pub const OPENAI_API_KEY_2_VAR: &str = "OPENAI_API_KEY_2";
pub const OPENAI_API_KEY_3_VAR: &str = "OPENAI_API_KEY_3";
/// Holds the *name* of the variable carrying the fallback credential.
pub const DEFAULT_KEY_VAR: &str = "DEFAULT_KEY";

/// Read-only key/value view of process configuration.
pub trait ConfigSource: Send + Sync {
    fn get(&self, name: &str) -> Option<String>;
}

/// Environment captured once at startup. Later changes to the process
/// environment are not observed.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot(HashMap<String, String>);

impl EnvSnapshot {
    pub fn from_process() -> Self {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl ConfigSource for EnvSnapshot {
    fn get(&self, name: &str) -> Option<String> {
        self.0.get(name).cloned()
    }
}
