//! Outside-interaction dismissal for popover panels.
//!
//! A panel only listens while it is open. Opening acquires a subscription on
//! the [`InteractionBus`]; closing or dropping the panel releases it.

use tokio::sync::broadcast;
use tokio::sync::broadcast::error::TryRecvError;
use tracing::trace;

const BUS_CAPACITY: usize = 32;

/// Pointer interaction relative to the open panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Inside,
    Outside,
}

#[derive(Debug)]
pub struct InteractionBus {
    tx: broadcast::Sender<Interaction>,
}

impl Default for InteractionBus {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(BUS_CAPACITY);
        Self { tx }
    }

    pub fn emit(&self, interaction: Interaction) {
        if self.tx.send(interaction).is_err() {
            trace!(?interaction, "no open panels");
        }
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.tx.receiver_count()
    }

    fn subscribe(&self) -> broadcast::Receiver<Interaction> {
        self.tx.subscribe()
    }
}

#[derive(Debug)]
pub struct DismissiblePanel {
    name: &'static str,
    subscription: Option<broadcast::Receiver<Interaction>>,
}

impl DismissiblePanel {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            subscription: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.subscription.is_some()
    }

    /// Opening an open panel keeps its existing subscription.
    pub fn open(&mut self, bus: &InteractionBus) {
        if self.subscription.is_none() {
            trace!(panel = self.name, "panel opened");
            self.subscription = Some(bus.subscribe());
        }
    }

    pub fn close(&mut self) {
        if self.subscription.take().is_some() {
            trace!(panel = self.name, "panel closed");
        }
    }

    /// Drains interactions received while open. Returns true if an outside
    /// interaction dismissed the panel.
    pub fn poll_dismissal(&mut self) -> bool {
        let Some(rx) = self.subscription.as_mut() else {
            return false;
        };
        loop {
            match rx.try_recv() {
                Ok(Interaction::Outside) => {
                    self.close();
                    return true;
                }
                Ok(Interaction::Inside) | Err(TryRecvError::Lagged(_)) => continue,
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return false,
            }
        }
    }
}
