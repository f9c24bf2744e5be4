use std::time::Duration;

pub const DEFAULT_LIMIT: usize = 5;
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

#[derive(Debug, Clone)]
pub struct SuggestConfig {
    /// Maximum number of suggestions shown.
    pub limit: usize,
    /// Quiet period after the last keystroke before a query is evaluated.
    pub debounce: Duration,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

impl From<&storefront_core::config::SearchConfig> for SuggestConfig {
    fn from(config: &storefront_core::config::SearchConfig) -> Self {
        Self {
            limit: config.suggestion_limit,
            debounce: config.debounce(),
        }
    }
}
