//! Pure query → suggestions mapping.

use crate::config::SuggestConfig;
use crate::entry::{CatalogIndex, SuggestionEntry};

/// What the dropdown should show for a query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SuggestionPanel {
    /// Blank query: the dropdown is closed.
    #[default]
    Hidden,
    /// Non-blank query that matched nothing.
    NoMatches,
    Matches(Vec<SuggestionEntry>),
}

impl SuggestionPanel {
    pub fn is_hidden(&self) -> bool {
        matches!(self, SuggestionPanel::Hidden)
    }

    pub fn entries(&self) -> &[SuggestionEntry] {
        match self {
            SuggestionPanel::Matches(entries) => entries,
            SuggestionPanel::Hidden | SuggestionPanel::NoMatches => &[],
        }
    }
}

/// Stateless suggestion matcher.
#[derive(Debug, Clone, Default)]
pub struct SuggestionEngine {
    config: SuggestConfig,
}

impl SuggestionEngine {
    pub fn new(config: SuggestConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SuggestConfig {
        &self.config
    }

    pub fn suggest(&self, query: &str, index: &CatalogIndex) -> Vec<SuggestionEntry> {
        suggest(query, index.entries(), self.config.limit)
    }

    pub fn panel(&self, query: &str, index: &CatalogIndex) -> SuggestionPanel {
        if is_blank(query) {
            return SuggestionPanel::Hidden;
        }
        let matches = self.suggest(query, index);
        if matches.is_empty() {
            SuggestionPanel::NoMatches
        } else {
            SuggestionPanel::Matches(matches)
        }
    }
}

pub fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}

/// Entries whose name contains `query`, ignoring case, in index order,
/// truncated to `limit`. Blank queries match nothing.
pub fn suggest(query: &str, entries: &[SuggestionEntry], limit: usize) -> Vec<SuggestionEntry> {
    let needle = query.trim();
    if needle.is_empty() || limit == 0 {
        return Vec::new();
    }

    let needle = needle.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.name.to_lowercase().contains(&needle))
        .take(limit)
        .cloned()
        .collect()
}
