//! End-to-end flow of one listing surface: hydrate from a shared link,
//! refine filters, and build the products request.

use storefront_core::types::{Category, PriceRange, Rating, SortField, SortOrder};
use storefront_core::{FilterStateStore, ProductQuery, QueryParams};
use url::Url;

fn category(s: &str) -> Category {
    Category::try_new(s.to_string()).unwrap()
}

#[test]
fn test_shared_link_round_trip() {
    let link = Url::parse(
        "https://shop.example/products?category=Electronics&minPrice=25&maxPrice=50&sortBy=price&sortOrder=asc",
    )
    .unwrap();
    let initial = QueryParams::parse(link.query().unwrap_or_default());

    let mut store = FilterStateStore::restored(&initial, link.clone());
    assert_eq!(store.active_filter_count(), 2);
    assert_eq!(store.state().sort_by(), SortField::Price);
    assert_eq!(store.state().sort_order(), SortOrder::Asc);

    store.set_price_range(PriceRange::between(0.0, 25.0).unwrap());
    store.set_rating(Rating::try_new(4).unwrap());
    store.set_category(category("Electronics"));

    let written = QueryParams::parse(store.observer().target().query().unwrap_or_default());
    assert_eq!(written.get("category"), None);
    assert_eq!(written.get("minPrice"), Some("0"));
    assert_eq!(written.get("maxPrice"), Some("25"));
    assert_eq!(written.get("rating"), Some("4"));

    let reopened = FilterStateStore::restored(&written, QueryParams::new());
    assert_eq!(reopened.state(), store.state());
}

#[test]
fn test_request_reflects_store() {
    let mut store = FilterStateStore::new();
    store.set_category(category("Books"));
    store.set_sort(SortField::Sales);

    let base = Url::parse("http://localhost:8080").unwrap();
    let url = ProductQuery::new("rust", store.state().clone()).to_url(&base);

    assert_eq!(
        url.as_str(),
        "http://localhost:8080/products?category=Books&search=rust&sortBy=sales&sortOrder=desc"
    );
}
