use super::QueryParams;
use crate::filter::FilterState;
use crate::types::{Brand, Category, Price, PriceRange, Rating, SortField, SortOrder};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

pub const CATEGORY: &str = "category";
pub const MIN_PRICE: &str = "minPrice";
pub const MAX_PRICE: &str = "maxPrice";
pub const RATING: &str = "rating";
pub const BRAND: &str = "brand";
pub const SORT_BY: &str = "sortBy";
pub const SORT_ORDER: &str = "sortOrder";

/// Bidirectional mapping between a bounded field set and [`QueryParams`].
///
/// Implementations must satisfy `decode(&encode(s)) == s` for every
/// representable `s`. `decode` ignores unknown keys and treats any field it
/// cannot parse as unset.
pub trait QueryCodec: Sized {
    fn encode(&self) -> QueryParams;

    fn decode(params: &QueryParams) -> Self;
}

/// Parses `key` with `FromStr`, logging and discarding malformed values.
pub(crate) fn parse_field<T>(params: &QueryParams, key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = params.get(key)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(err) => {
            debug!(key, raw, %err, "ignoring malformed query field");
            None
        }
    }
}

/// Parses `key` and then runs it through a validating constructor.
fn parse_validated<R, T, E>(params: &QueryParams, key: &str, validate: fn(R) -> Result<T, E>) -> Option<T>
where
    R: FromStr,
    R::Err: fmt::Display,
    E: fmt::Display,
{
    let raw = parse_field::<R>(params, key)?;
    match validate(raw) {
        Ok(value) => Some(value),
        Err(err) => {
            debug!(key, %err, "ignoring out-of-range query field");
            None
        }
    }
}

fn parse_label<T, E>(params: &QueryParams, key: &str, validate: fn(String) -> Result<T, E>) -> Option<T>
where
    E: fmt::Display,
{
    let raw = params.get(key)?;
    match validate(raw.to_string()) {
        Ok(value) => Some(value),
        Err(err) => {
            debug!(key, raw, %err, "ignoring invalid query label");
            None
        }
    }
}

impl QueryCodec for FilterState {
    fn encode(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.insert_opt(CATEGORY, self.category());
        params.insert_opt(MIN_PRICE, self.min_price());
        params.insert_opt(MAX_PRICE, self.max_price());
        params.insert_opt(RATING, self.rating());
        params.insert_opt(BRAND, self.brand());
        params.insert(SORT_BY, self.sort_by().as_str());
        params.insert(SORT_ORDER, self.sort_order().as_str());
        params
    }

    fn decode(params: &QueryParams) -> Self {
        let min = parse_validated(params, MIN_PRICE, Price::try_new);
        let max = parse_validated(params, MAX_PRICE, Price::try_new);
        let price = match (min, max) {
            (None, None) => None,
            (min, max) => PriceRange::new(min, max)
                .inspect_err(|err| debug!(%err, "ignoring price range"))
                .ok(),
        };

        FilterState {
            category: parse_label(params, CATEGORY, |raw| Category::try_new(raw)),
            price,
            rating: parse_validated(params, RATING, Rating::try_new),
            brand: parse_label(params, BRAND, |raw| Brand::try_new(raw)),
            sort_by: parse_field::<SortField>(params, SORT_BY).unwrap_or_default(),
            sort_order: parse_field::<SortOrder>(params, SORT_ORDER).unwrap_or_default(),
        }
    }
}
