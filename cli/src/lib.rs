//! Terminal front end for one storefront listing surface.

pub mod api;
pub mod command;
pub mod error;
pub mod panel;
pub mod session;
