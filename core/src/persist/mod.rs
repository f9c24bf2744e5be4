//! Shareable, bookmarkable query-string form of filter state.
//!
//! Write-through only: every store transition re-encodes the state into the
//! target. The serialized form is read back exactly once, when a surface is
//! mounted, and is never re-applied afterwards.

mod codec;
mod date_range;
mod params;

pub use codec::{
    BRAND, CATEGORY, MAX_PRICE, MIN_PRICE, QueryCodec, RATING, SORT_BY, SORT_ORDER,
};
pub use date_range::{DateRange, END_DATE, START_DATE};
pub use params::QueryParams;

use crate::filter::{FilterObserver, FilterState, FilterStateStore};
use tracing::trace;
use url::Url;

/// Destination for the serialized form, e.g. the address bar.
pub trait QueryTarget {
    fn replace(&mut self, params: &QueryParams);
}

impl QueryTarget for QueryParams {
    fn replace(&mut self, params: &QueryParams) {
        self.clone_from(params);
    }
}

impl QueryTarget for Url {
    fn replace(&mut self, params: &QueryParams) {
        if params.is_empty() {
            self.set_query(None);
        } else {
            self.set_query(Some(&params.to_query_string()));
        }
    }
}

/// Keeps a [`QueryTarget`] in sync with a [`FilterStateStore`].
#[derive(Debug)]
pub struct PersistedQueryState<T: QueryTarget> {
    target: T,
}

impl<T: QueryTarget> PersistedQueryState<T> {
    pub fn new(target: T) -> Self {
        Self { target }
    }

    /// Decodes the initial representation handed to a surface on mount.
    pub fn restore<C: QueryCodec>(initial: &QueryParams) -> C {
        C::decode(initial)
    }

    pub fn write<C: QueryCodec>(&mut self, state: &C) {
        let params = state.encode();
        trace!(query = %params, "writing persisted query");
        self.target.replace(&params);
    }

    pub fn target(&self) -> &T {
        &self.target
    }
}

impl<T: QueryTarget> FilterObserver for PersistedQueryState<T> {
    fn filters_changed(&mut self, state: &FilterState) {
        self.write(state);
    }
}

impl<T: QueryTarget> FilterStateStore<PersistedQueryState<T>> {
    /// Builds a store hydrated from `initial`, writing every later
    /// transition through to `target`.
    ///
    /// The target is normalized to the decoded state straight away, so
    /// malformed or unknown keys from `initial` do not linger.
    pub fn restored(initial: &QueryParams, target: T) -> Self {
        let state: FilterState = PersistedQueryState::<T>::restore(initial);
        let mut persisted = PersistedQueryState::new(target);
        persisted.write(&state);
        FilterStateStore::with_observer(state, persisted)
    }
}
