//! Read-only catalog the suggestion dropdown draws from.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use storefront_core::Product;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SuggestionEntry {
    pub id: u64,
    pub name: String,
    pub category: String,
}

impl From<&Product> for SuggestionEntry {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            category: product.category.clone(),
        }
    }
}

/// Ordered, immutable sequence of entries. Cloning shares the same storage.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    entries: Arc<[SuggestionEntry]>,
}

impl CatalogIndex {
    pub fn new(entries: Vec<SuggestionEntry>) -> Self {
        Self {
            entries: entries.into(),
        }
    }

    pub fn from_products(products: &[Product]) -> Self {
        Self::new(products.iter().map(SuggestionEntry::from).collect())
    }

    pub fn entries(&self) -> &[SuggestionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<SuggestionEntry> for CatalogIndex {
    fn from_iter<I: IntoIterator<Item = SuggestionEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
