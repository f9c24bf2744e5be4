//! Request lifecycle shared by every data-driven storefront view.
//!
//! An [`AsyncRequestController`] owns one [`RequestState`]. Each `execute`
//! call takes a fresh generation; a response only lands if its generation is
//! still current when it resolves. Superseded responses, successful or not,
//! are dropped without touching the state. Failures that do land become
//! `status = Error` plus one notice on the injected [`NotificationSink`];
//! nothing is retried automatically.

mod controller;
mod failure;
mod notify;
mod state;

pub use controller::AsyncRequestController;
pub use failure::{ApiError, ErrorBody, Failure, GENERIC_FAILURE_MESSAGE};
pub use notify::{NoopSink, NotificationSink, TracingSink};
pub use state::{Outcome, RequestState, RequestStatus};

#[cfg(test)]
mod tests;
