use crate::error::ValidationError;
use nutype::nutype;

/// Non-negative, finite unit price.
///
/// `Display` uses the shortest representation that parses back to the same
/// value, so `25.0` renders as `25` and `19.99` as `19.99`.
#[nutype(
    validate(finite, greater_or_equal = 0.0),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        PartialOrd,
        TryFrom,
        Into,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Price(f64);

/// Price filter bounds. A missing `max` is the open-ended upper range; a
/// missing `min` is unbounded below. At least one bound is always present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    min: Option<Price>,
    max: Option<Price>,
}

impl PriceRange {
    pub fn new(min: Option<Price>, max: Option<Price>) -> Result<Self, ValidationError> {
        match (min, max) {
            (None, None) => Err(ValidationError::EmptyPriceRange),
            (Some(lo), Some(hi)) if lo > hi => Err(ValidationError::InvertedPriceRange {
                min: lo.into_inner(),
                max: hi.into_inner(),
            }),
            _ => Ok(Self { min, max }),
        }
    }

    pub fn between(min: f64, max: f64) -> Result<Self, ValidationError> {
        Self::new(Some(Price::try_new(min)?), Some(Price::try_new(max)?))
    }

    /// Range with no upper bound.
    pub fn at_least(min: f64) -> Result<Self, ValidationError> {
        Self::new(Some(Price::try_new(min)?), None)
    }

    pub fn min(&self) -> Option<Price> {
        self.min
    }

    pub fn max(&self) -> Option<Price> {
        self.max
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min.is_none_or(|lo| price >= lo.into_inner())
            && self.max.is_none_or(|hi| price <= hi.into_inner())
    }
}
