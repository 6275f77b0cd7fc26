use crate::constants::{env, search};
use std::path::PathBuf;
use std::time::Duration;

fn normalize_env_value(value: Option<String>) -> Option<String> {
    let raw = value?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lowered = trimmed.to_lowercase();
    if lowered == "undefined" || lowered == "null" {
        return None;
    }
    Some(trimmed.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON catalog to load instead of the bundled one.
    pub catalog_path: Option<PathBuf>,
    pub debounce: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            debounce: Duration::from_millis(search::DEBOUNCE_MS),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let catalog_path =
            normalize_env_value(std::env::var(env::CATALOG_PATH).ok()).map(PathBuf::from);
        let debounce_ms = normalize_env_value(std::env::var(env::DEBOUNCE_MS).ok())
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(search::DEBOUNCE_MS);
        Self {
            catalog_path,
            debounce: Duration::from_millis(debounce_ms),
        }
    }

    pub fn with_catalog_path(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.catalog_path = path;
        }
        self
    }
}
