//! Search-box suggestions for the storefront.
//!
//! # Design
//!
//! - [`suggest`] is pure: case-insensitive substring match on entry names,
//!   index order preserved, capped at the configured limit.
//! - A blank query hides the dropdown ([`SuggestionPanel::Hidden`]); a query
//!   with no hits shows [`SuggestionPanel::NoMatches`].
//! - Debouncing belongs to the input site, not the engine. Each
//!   [`SuggestionBinding`] owns one [`DebounceTimer`] and every keystroke
//!   replaces the pending evaluation.

mod binding;
mod config;
mod debounce;
mod engine;
mod entry;

pub use binding::SuggestionBinding;
pub use config::{DEFAULT_DEBOUNCE, DEFAULT_LIMIT, SuggestConfig};
pub use debounce::DebounceTimer;
pub use engine::{SuggestionEngine, SuggestionPanel, is_blank, suggest};
pub use entry::{CatalogIndex, SuggestionEntry};
