//! Client-side contract for `GET /products`.

use crate::filter::FilterState;
use crate::persist::{QueryCodec, QueryParams};
use serde::{Deserialize, Serialize};
use url::Url;

pub const PRODUCTS_PATH: &str = "/products";
pub const SEARCH: &str = "search";

/// One search/filter request: free text plus the current filter selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    search: Option<String>,
    filters: FilterState,
}

impl ProductQuery {
    pub fn new(search: &str, filters: FilterState) -> Self {
        let search = search.trim();
        Self {
            search: (!search.is_empty()).then(|| search.to_string()),
            filters,
        }
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Request parameters; unset fields are omitted.
    pub fn to_params(&self) -> QueryParams {
        let mut params = self.filters.encode();
        params.insert_opt(SEARCH, self.search.as_deref());
        params
    }

    /// Absolute request URL under `base`, replacing any path or query on it.
    pub fn to_url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        url.set_path(PRODUCTS_PATH);
        url.set_query(Some(&self.to_params().to_query_string()));
        url
    }
}

/// Product record as returned by the products endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub brand: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub sales: u64,
    #[serde(default)]
    pub created_at: Option<String>,
}
