//! Products endpoint collaborator.
//!
//! [`FixtureProducts`] serves a catalog file from memory so the discovery
//! surface can run without a backend. It applies the request parameters
//! literally and makes no attempt at relevance ranking.

use crate::error::CliError;
use std::future::Future;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use storefront_core::types::{SortField, SortOrder};
use storefront_core::{Product, ProductQuery};
use storefront_request::ApiError;
use tracing::debug;

pub trait ProductsApi: Send + Sync + 'static {
    fn fetch(&self, query: ProductQuery) -> impl Future<Output = Result<Vec<Product>, ApiError>> + Send;
}

#[derive(Debug, Clone)]
pub struct FixtureProducts {
    products: Arc<[Product]>,
    latency: Duration,
}

impl FixtureProducts {
    pub fn new(products: Vec<Product>, latency: Duration) -> Self {
        Self {
            products: products.into(),
            latency,
        }
    }

    pub fn load(path: &Path, latency: Duration) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path)?;
        let products: Vec<Product> = serde_json::from_str(&content)?;
        debug!(path = %path.display(), count = products.len(), "catalog loaded");
        Ok(Self::new(products, latency))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    fn matching(&self, query: &ProductQuery) -> Vec<Product> {
        let filters = query.filters();
        let needle = query.search().map(str::to_lowercase);

        let mut hits: Vec<Product> = self
            .products
            .iter()
            .filter(|p| {
                needle
                    .as_deref()
                    .is_none_or(|n| p.name.to_lowercase().contains(n))
            })
            .filter(|p| filters.category().is_none_or(|c| p.category == c.as_str()))
            .filter(|p| {
                filters
                    .brand()
                    .is_none_or(|b| p.brand.as_deref() == Some(b.as_str()))
            })
            .filter(|p| filters.price_range().is_none_or(|r| r.contains(p.price)))
            .filter(|p| {
                filters
                    .rating()
                    .is_none_or(|r| p.rating >= f64::from(r.into_inner()))
            })
            .cloned()
            .collect();

        hits.sort_by(|a, b| {
            let ordering = match filters.sort_by() {
                SortField::CreatedAt => a.created_at.cmp(&b.created_at),
                SortField::Price => a.price.total_cmp(&b.price),
                SortField::Rating => a.rating.total_cmp(&b.rating),
                SortField::Name => a.name.cmp(&b.name),
                SortField::Sales => a.sales.cmp(&b.sales),
            };
            match filters.sort_order() {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
        hits
    }
}

impl ProductsApi for FixtureProducts {
    async fn fetch(&self, query: ProductQuery) -> Result<Vec<Product>, ApiError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(self.matching(&query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::FilterStateStore;
    use storefront_core::types::{Category, PriceRange};

    fn product(id: u64, name: &str, category: &str, price: f64, rating: f64) -> Product {
        Product {
            id,
            name: name.to_string(),
            category: category.to_string(),
            brand: None,
            price,
            rating,
            sales: id * 10,
            created_at: Some(format!("2024-01-{id:02}")),
        }
    }

    fn fixture() -> FixtureProducts {
        FixtureProducts::new(
            vec![
                product(1, "Wireless Gaming Mouse", "Electronics", 49.99, 4.5),
                product(2, "Mouse Pad XL", "Accessories", 19.0, 4.0),
                product(3, "Mechanical Keyboard", "Electronics", 89.0, 4.8),
            ],
            Duration::ZERO,
        )
    }

    #[tokio::test]
    async fn test_applies_search_and_filters() {
        let mut store = FilterStateStore::new();
        store.set_category(Category::try_new("Electronics".to_string()).unwrap());

        let hits = fixture()
            .fetch(ProductQuery::new("MOUSE", store.state().clone()))
            .await
            .unwrap();

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
    }

    #[tokio::test]
    async fn test_sorts_by_requested_field() {
        let mut store = FilterStateStore::new();
        store.set_sort(SortField::Price);
        store.set_sort(SortField::Price);
        store.set_price_range(PriceRange::at_least(10.0).unwrap());

        let hits = fixture()
            .fetch(ProductQuery::new("", store.state().clone()))
            .await
            .unwrap();

        let ids: Vec<u64> = hits.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_load_reads_catalog_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"[{"id": 1, "name": "Desk Lamp", "category": "Home", "price": 20}]"#,
        )
        .unwrap();

        let fixture = FixtureProducts::load(&path, Duration::ZERO).unwrap();

        assert_eq!(fixture.products().len(), 1);
    }

    #[test]
    fn test_load_rejects_malformed_catalog() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(matches!(
            FixtureProducts::load(&path, Duration::ZERO),
            Err(CliError::CatalogParse(_))
        ));
    }
}
