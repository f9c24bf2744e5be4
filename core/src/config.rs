use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

pub const MIN_DEBOUNCE_MS: u64 = 150;
pub const MAX_DEBOUNCE_MS: u64 = 300;

/// User-facing application configuration, persisted as storefront.toml.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

impl AppConfig {
    /// `storefront.toml` inside `dir`.
    pub fn path(dir: &Path) -> std::path::PathBuf {
        dir.join("storefront.toml")
    }

    /// Reads search and API settings. A missing file means every setting
    /// takes its default.
    pub fn load(path: &Path) -> Result<Self, AppConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => return Err(err.into()),
        };
        Ok(toml::from_str(&content)?)
    }

    /// Writes the settings back, creating the parent directory if needed.
    pub fn save(&self, path: &Path) -> Result<(), AppConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !(MIN_DEBOUNCE_MS..=MAX_DEBOUNCE_MS).contains(&self.search.debounce_ms) {
            errors.push(format!(
                "debounce_ms must be between {MIN_DEBOUNCE_MS} and {MAX_DEBOUNCE_MS}"
            ));
        }

        if self.search.suggestion_limit == 0 {
            errors.push("suggestion_limit must be at least 1".to_string());
        }

        if url::Url::parse(&self.api.base_url).is_err() {
            errors.push(format!("base_url is not a valid URL: {}", self.api.base_url));
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        Self {
            search: SearchConfig {
                debounce_ms: if (MIN_DEBOUNCE_MS..=MAX_DEBOUNCE_MS)
                    .contains(&self.search.debounce_ms)
                {
                    self.search.debounce_ms
                } else {
                    defaults.search.debounce_ms
                },
                suggestion_limit: if self.search.suggestion_limit == 0 {
                    defaults.search.suggestion_limit
                } else {
                    self.search.suggestion_limit
                },
            },
            api: ApiConfig {
                base_url: if url::Url::parse(&self.api.base_url).is_ok() {
                    self.api.base_url.clone()
                } else {
                    defaults.api.base_url
                },
            },
        }
    }
}

/// Suggestion dropdown settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            suggestion_limit: default_suggestion_limit(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    200
}

fn default_suggestion_limit() -> usize {
    5
}

/// Products endpoint settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("storefront.toml is not accessible: {0}")]
    Io(#[from] std::io::Error),
    #[error("storefront.toml is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("settings could not be written as TOML: {0}")]
    Serialize(#[from] toml::ser::Error),
}
