use crate::types::{BrandError, CategoryError, PriceError, RatingError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("config error: {0}")]
    Config(#[from] crate::config::AppConfigError),
}

/// Caller-side contract violations, rejected when a value is constructed.
///
/// Filter transitions only accept already-validated values, so none of these
/// can surface from [`FilterStateStore`](crate::filter::FilterStateStore).
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("invalid category: {0}")]
    InvalidCategory(#[from] CategoryError),

    #[error("invalid brand: {0}")]
    InvalidBrand(#[from] BrandError),

    #[error("invalid rating: {0}")]
    InvalidRating(#[from] RatingError),

    #[error("invalid price: {0}")]
    InvalidPrice(#[from] PriceError),

    #[error("price range is inverted: min {min} exceeds max {max}")]
    InvertedPriceRange { min: f64, max: f64 },

    #[error("price range has neither a lower nor an upper bound")]
    EmptyPriceRange,

    #[error("unknown sort field: {0}")]
    UnknownSortField(String),

    #[error("unknown sort order: {0}")]
    UnknownSortOrder(String),

    #[error("date range is inverted: {start} is after {end}")]
    InvertedDateRange {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },
}
