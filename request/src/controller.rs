use crate::failure::Failure;
use crate::notify::{NotificationSink, TracingSink};
use crate::state::{Outcome, RequestState, RequestStatus};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, trace};

/// Wraps a collaborator operation with loading/data/error state.
///
/// Last-issued-wins: whatever order calls resolve in, only the most recently
/// issued one commits. Superseded calls run to completion and their results
/// are dropped. Clones share the same state.
pub struct AsyncRequestController<T> {
    state: Arc<watch::Sender<RequestState<T>>>,
    sink: Arc<dyn NotificationSink>,
}

impl<T> Clone for AsyncRequestController<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            sink: Arc::clone(&self.sink),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Default for AsyncRequestController<T> {
    fn default() -> Self {
        Self::new(Arc::new(TracingSink))
    }
}

impl<T: Clone + Send + Sync + 'static> AsyncRequestController<T> {
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        let (state, _) = watch::channel(RequestState::default());
        Self {
            state: Arc::new(state),
            sink,
        }
    }

    pub fn snapshot(&self) -> RequestState<T> {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<RequestState<T>> {
        self.state.subscribe()
    }

    pub fn generation(&self) -> u64 {
        self.state.borrow().generation
    }

    /// Issues `operation` as the newest call.
    ///
    /// The generation bump and the switch to `Loading` happen before this
    /// returns, so issue order is call order even if the futures are polled
    /// in a different order. Previous data stays visible while loading.
    pub fn execute<Op, Fut, E>(&self, operation: Op) -> impl Future<Output = Outcome<T>> + use<T, Op, Fut, E>
    where
        Op: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Failure,
    {
        let mut generation = 0;
        self.state.send_modify(|state| {
            state.generation += 1;
            state.status = RequestStatus::Loading;
            state.error_message = None;
            generation = state.generation;
        });
        trace!(generation, "request issued");

        let pending = operation();
        let state = Arc::clone(&self.state);
        let sink = Arc::clone(&self.sink);
        async move {
            let result = pending.await;
            resolve(&state, sink.as_ref(), generation, result)
        }
    }

    /// Argument-passing form of [`execute`](Self::execute).
    pub fn execute_with<A, Op, Fut, E>(&self, operation: Op, args: A) -> impl Future<Output = Outcome<T>> + use<T, A, Op, Fut, E>
    where
        Op: FnOnce(A) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Failure,
    {
        self.execute(move || operation(args))
    }

    /// Back to `Idle` with no data or error. The generation is left alone:
    /// a call that is still in flight and was not superseded will commit.
    pub fn reset(&self) {
        self.state.send_modify(|state| {
            state.status = RequestStatus::Idle;
            state.data = None;
            state.error_message = None;
        });
    }
}

fn resolve<T: Clone, E: Failure>(
    state: &watch::Sender<RequestState<T>>,
    sink: &dyn NotificationSink,
    generation: u64,
    result: Result<T, E>,
) -> Outcome<T> {
    let mut outcome = Outcome::Superseded;
    state.send_if_modified(|current| {
        if current.generation != generation {
            return false;
        }
        match &result {
            Ok(data) => {
                current.data = Some(data.clone());
                current.status = RequestStatus::Success;
                outcome = Outcome::Committed(data.clone());
            }
            Err(err) => {
                let message = err.user_message();
                current.error_message = Some(message.clone());
                current.status = RequestStatus::Error;
                outcome = Outcome::Failed(message);
            }
        }
        true
    });

    match &outcome {
        Outcome::Committed(_) => debug!(generation, "request committed"),
        Outcome::Failed(message) => {
            debug!(generation, error = %message, "request failed");
            sink.notify(message);
        }
        Outcome::Superseded => {
            debug!(generation, current = state.borrow().generation, "discarding superseded response")
        }
    }
    outcome
}
