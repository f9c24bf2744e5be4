//! Product-discovery state for storefront listing surfaces.
//!
//! - [`filter`]: filter/sort selection and the store that owns it.
//! - [`persist`]: query-string form of that selection, kept in sync by write-through.
//! - [`products`]: request contract for the products endpoint.

pub mod config;
pub mod error;
pub mod filter;
pub mod persist;
pub mod products;
pub mod types;

pub use config::{AppConfig, AppConfigError};
pub use error::{Error, Result, ValidationError};
pub use filter::{FilterObserver, FilterState, FilterStateStore};
pub use persist::{DateRange, PersistedQueryState, QueryCodec, QueryParams, QueryTarget};
pub use products::{Product, ProductQuery};
