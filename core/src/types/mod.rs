pub(crate) mod label;
pub use label::{Brand, BrandError, Category, CategoryError, MAX_LABEL_LENGTH};

pub(crate) mod price;
pub use price::{Price, PriceError, PriceRange};

pub(crate) mod rating;
pub use rating::{Rating, RatingError};

pub(crate) mod sort;
pub use sort::{SortField, SortOrder};
