//! One product-listing surface: a single filter store, request controller
//! and suggestion binding, driven by [`Command`]s.

use crate::api::ProductsApi;
use crate::command::{Command, HELP};
use crate::panel::{DismissiblePanel, InteractionBus};
use std::sync::Arc;
use storefront_core::{FilterStateStore, PersistedQueryState, Product, ProductQuery, QueryParams};
use storefront_request::{AsyncRequestController, NotificationSink, RequestState, RequestStatus};
use storefront_search::{CatalogIndex, SuggestionBinding, SuggestionEngine, SuggestionPanel};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;
use url::Url;

/// What the caller should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Continue,
    Print(String),
    Quit,
}

pub struct DiscoverySession<A: ProductsApi> {
    api: Arc<A>,
    base_url: Url,
    filters: FilterStateStore<PersistedQueryState<Url>>,
    results: AsyncRequestController<Vec<Product>>,
    suggestions: SuggestionBinding,
    search_text: String,
    bus: InteractionBus,
    filter_panel: DismissiblePanel,
    suggestion_panel: DismissiblePanel,
}

impl<A: ProductsApi> DiscoverySession<A> {
    /// Mounts the surface. `initial` is read exactly once, here.
    pub fn mount(
        api: Arc<A>,
        base_url: Url,
        initial: &QueryParams,
        engine: SuggestionEngine,
        index: CatalogIndex,
        sink: Arc<dyn NotificationSink>,
    ) -> Self {
        let mut location = base_url.clone();
        location.set_path(storefront_core::products::PRODUCTS_PATH);
        Self {
            api,
            base_url,
            filters: FilterStateStore::restored(initial, location),
            results: AsyncRequestController::new(sink),
            suggestions: SuggestionBinding::new(engine, index),
            search_text: String::new(),
            bus: InteractionBus::new(),
            filter_panel: DismissiblePanel::new("filters"),
            suggestion_panel: DismissiblePanel::new("suggestions"),
        }
    }

    pub fn query(&self) -> ProductQuery {
        ProductQuery::new(&self.search_text, self.filters.state().clone())
    }

    /// Shareable address of the current filter selection.
    pub fn location(&self) -> &Url {
        self.filters.observer().target()
    }

    pub fn results(&self) -> RequestState<Vec<Product>> {
        self.results.snapshot()
    }

    pub fn subscribe_results(&self) -> watch::Receiver<RequestState<Vec<Product>>> {
        self.results.subscribe()
    }

    pub fn subscribe_suggestions(&self) -> watch::Receiver<SuggestionPanel> {
        self.suggestions.subscribe()
    }

    pub fn interactions(&self) -> &InteractionBus {
        &self.bus
    }

    pub fn filter_panel_open(&self) -> bool {
        self.filter_panel.is_open()
    }

    /// Issues a fetch for the current query. The returned task finishes when
    /// the response has been reconciled with the controller.
    pub fn refresh(&self) -> JoinHandle<()> {
        let query = self.query();
        debug!(request = %query.to_url(&self.base_url), "fetching products");
        let api = Arc::clone(&self.api);
        let pending = self
            .results
            .execute(move || async move { api.fetch(query).await });
        tokio::spawn(async move {
            pending.await;
        })
    }

    /// Filter transitions that change the selection issue exactly one fetch.
    pub fn apply(&mut self, command: Command) -> Step {
        let before = self.filters.state().clone();
        let filter_command = match command {
            Command::Type(text) => {
                self.suggestions.on_input(&text);
                if storefront_search::is_blank(&text) {
                    self.suggestion_panel.close();
                } else {
                    self.suggestion_panel.open(&self.bus);
                }
                self.search_text = text;
                false
            }
            Command::Search => {
                self.suggestions.dismiss();
                self.suggestion_panel.close();
                self.refresh();
                false
            }
            Command::Category(category) => {
                self.filters.set_category(category);
                true
            }
            Command::Brand(brand) => {
                self.filters.set_brand(brand);
                true
            }
            Command::Rating(rating) => {
                self.filters.set_rating(rating);
                true
            }
            Command::Price(range) => {
                self.filters.set_price_range(range);
                true
            }
            Command::ClearPrice => {
                self.filters.clear_price_range();
                true
            }
            Command::Sort(field) => {
                self.filters.set_sort(field);
                true
            }
            Command::Clear => {
                self.filters.clear_all();
                true
            }
            Command::OpenFilters => {
                self.filter_panel.open(&self.bus);
                false
            }
            Command::CloseFilters => {
                self.filter_panel.close();
                false
            }
            Command::Click(interaction) => {
                self.bus.emit(interaction);
                self.poll_dismissals();
                false
            }
            Command::Show => return Step::Print(self.describe()),
            Command::Help => return Step::Print(HELP.to_string()),
            Command::Quit => return Step::Quit,
        };

        if filter_command && self.filters.state() != &before {
            self.refresh();
        }
        Step::Continue
    }

    fn poll_dismissals(&mut self) {
        if self.filter_panel.poll_dismissal() {
            debug!("filter panel dismissed");
        }
        if self.suggestion_panel.poll_dismissal() {
            self.suggestions.dismiss();
            debug!("suggestions dismissed");
        }
    }

    pub fn describe(&self) -> String {
        let state = self.results.snapshot();
        let mut out = format!(
            "location: {}\nactive filters: {}\nfilter panel: {}\nrequest: {}",
            self.location(),
            self.filters.active_filter_count(),
            if self.filter_panel.is_open() { "open" } else { "closed" },
            describe_status(&state),
        );
        if let Some(products) = &state.data {
            for product in products {
                out.push_str(&format!(
                    "\n  #{} {} ({}) {:.2}",
                    product.id, product.name, product.category, product.price
                ));
            }
        }
        out
    }
}

pub fn describe_status<T>(state: &RequestState<T>) -> String {
    match state.status {
        RequestStatus::Idle => "idle".to_string(),
        RequestStatus::Loading => format!("loading (generation {})", state.generation),
        RequestStatus::Success => "ok".to_string(),
        RequestStatus::Error => format!(
            "error: {}",
            state.error_message.as_deref().unwrap_or_default()
        ),
    }
}
