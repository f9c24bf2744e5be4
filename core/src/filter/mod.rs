//! Filter and sort selection for a product listing surface.
//!
//! `FilterState` is only mutated through the transition operations on
//! [`FilterStateStore`]. Every transition takes pre-validated values, so no
//! operation can fail.

use crate::types::{Brand, Category, Price, PriceRange, Rating, SortField, SortOrder};
use tracing::trace;

/// Normalized filter and sort selection.
///
/// The default value is the unset state: no filters, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub(crate) category: Option<Category>,
    pub(crate) price: Option<PriceRange>,
    pub(crate) rating: Option<Rating>,
    pub(crate) brand: Option<Brand>,
    pub(crate) sort_by: SortField,
    pub(crate) sort_order: SortOrder,
}

impl FilterState {
    pub fn category(&self) -> Option<&Category> {
        self.category.as_ref()
    }

    pub fn price_range(&self) -> Option<PriceRange> {
        self.price
    }

    pub fn min_price(&self) -> Option<Price> {
        self.price.and_then(|range| range.min())
    }

    pub fn max_price(&self) -> Option<Price> {
        self.price.and_then(|range| range.max())
    }

    pub fn rating(&self) -> Option<Rating> {
        self.rating
    }

    pub fn brand(&self) -> Option<&Brand> {
        self.brand.as_ref()
    }

    pub fn sort_by(&self) -> SortField {
        self.sort_by
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Number of filter dimensions currently set. Sorting is not a filter.
    pub fn active_filter_count(&self) -> usize {
        [
            self.category.is_some(),
            self.price.is_some(),
            self.rating.is_some(),
            self.brand.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }
}

/// Receives the new state after every transition that changed it.
pub trait FilterObserver {
    fn filters_changed(&mut self, state: &FilterState);
}

impl FilterObserver for () {
    fn filters_changed(&mut self, _state: &FilterState) {}
}

/// Owner of one surface's [`FilterState`].
#[derive(Debug, Default)]
pub struct FilterStateStore<O: FilterObserver = ()> {
    state: FilterState,
    observer: O,
}

impl FilterStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<O: FilterObserver> FilterStateStore<O> {
    /// Wraps an existing state. The observer is not called for `state` itself.
    pub fn with_observer(state: FilterState, observer: O) -> Self {
        Self { state, observer }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn active_filter_count(&self) -> usize {
        self.state.active_filter_count()
    }
}

/// Transition operations.
impl<O: FilterObserver> FilterStateStore<O> {
    /// Selects `category`, or clears it if it is already the active one.
    pub fn set_category(&mut self, category: Category) -> &FilterState {
        toggle(&mut self.state.category, category);
        trace!(category = ?self.state.category, "category filter changed");
        self.commit()
    }

    /// Replaces the whole price range. Bounds are never merged with the
    /// previous selection.
    pub fn set_price_range(&mut self, range: PriceRange) -> &FilterState {
        let previous = self.state.price.replace(range);
        trace!(?previous, current = ?range, "price range replaced");
        if previous == Some(range) {
            return &self.state;
        }
        self.commit()
    }

    pub fn clear_price_range(&mut self) -> &FilterState {
        if self.state.price.take().is_none() {
            return &self.state;
        }
        trace!("price range cleared");
        self.commit()
    }

    pub fn set_rating(&mut self, rating: Rating) -> &FilterState {
        toggle(&mut self.state.rating, rating);
        trace!(rating = ?self.state.rating, "rating filter changed");
        self.commit()
    }

    pub fn set_brand(&mut self, brand: Brand) -> &FilterState {
        toggle(&mut self.state.brand, brand);
        trace!(brand = ?self.state.brand, "brand filter changed");
        self.commit()
    }

    /// Re-selecting the active sort field flips the order; a new field
    /// starts descending.
    pub fn set_sort(&mut self, field: SortField) -> &FilterState {
        if self.state.sort_by == field {
            self.state.sort_order = self.state.sort_order.flip();
        } else {
            self.state.sort_by = field;
            self.state.sort_order = SortOrder::Desc;
        }
        trace!(sort_by = %self.state.sort_by, sort_order = %self.state.sort_order, "sort changed");
        self.commit()
    }

    pub fn clear_all(&mut self) -> &FilterState {
        if self.state == FilterState::default() {
            return &self.state;
        }
        self.state = FilterState::default();
        trace!("all filters cleared");
        self.commit()
    }

    fn commit(&mut self) -> &FilterState {
        self.observer.filters_changed(&self.state);
        &self.state
    }
}

fn toggle<T: PartialEq>(slot: &mut Option<T>, value: T) {
    if slot.as_ref() == Some(&value) {
        *slot = None;
    } else {
        *slot = Some(value);
    }
}
