//! Web layer for the doable application.
//!
//! Request handling is split by concern: a session store with a
//! cookie-based extractor, form-backed handlers per entity, a single error
//! type at the HTTP boundary, and page context assembly shared by every
//! list and detail view. Handlers return JSON contexts; rendering happens
//! in a separate front end.

pub mod auth;
pub mod context;
pub mod error;
pub mod routes;
pub mod session;
pub mod state;
pub mod tags;
pub mod tasks;
