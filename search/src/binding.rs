//! Live-input binding: keystrokes in, debounced suggestion panels out.

use crate::debounce::DebounceTimer;
use crate::engine::{SuggestionEngine, SuggestionPanel, is_blank};
use crate::entry::CatalogIndex;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, trace};

/// One search box's connection to the [`SuggestionEngine`].
///
/// Owns the debounce timer for its site. The latest panel is published on a
/// `watch` channel; readers see only the evaluation for the last query typed.
pub struct SuggestionBinding {
    engine: SuggestionEngine,
    index: CatalogIndex,
    timer: DebounceTimer,
    panel: Arc<watch::Sender<SuggestionPanel>>,
    query: String,
}

impl SuggestionBinding {
    pub fn new(engine: SuggestionEngine, index: CatalogIndex) -> Self {
        let timer = DebounceTimer::new(engine.config().debounce);
        let (panel, _) = watch::channel(SuggestionPanel::Hidden);
        Self {
            engine,
            index,
            timer,
            panel: Arc::new(panel),
            query: String::new(),
        }
    }

    /// Handles one keystroke's worth of input text.
    ///
    /// A blank query hides the panel immediately and drops any pending
    /// evaluation. Anything else replaces the pending evaluation.
    pub fn on_input(&mut self, text: &str) {
        self.query.clear();
        self.query.push_str(text);

        if is_blank(text) {
            if self.timer.cancel() {
                trace!("blank query, pending suggestion evaluation cancelled");
            }
            self.publish(SuggestionPanel::Hidden);
            return;
        }

        let engine = self.engine.clone();
        let index = self.index.clone();
        let panel = Arc::clone(&self.panel);
        let query = text.to_string();
        self.timer.schedule(move || {
            let next = engine.panel(&query, &index);
            debug!(query = %query, shown = next.entries().len(), "suggestions evaluated");
            panel.send_replace(next);
        });
    }

    /// Closes the panel without changing the query text.
    pub fn dismiss(&mut self) {
        self.timer.cancel();
        self.publish(SuggestionPanel::Hidden);
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn current(&self) -> SuggestionPanel {
        self.panel.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SuggestionPanel> {
        self.panel.subscribe()
    }

    pub fn is_pending(&self) -> bool {
        self.timer.is_pending()
    }

    fn publish(&self, next: SuggestionPanel) {
        self.panel.send_if_modified(|current| {
            if *current == next {
                return false;
            }
            *current = next;
            true
        });
    }
}
