//! HTTP surface over the triage engine.
//!
//! `triage_router()` returns a composable `Router` that can be mounted on any
//! axum server; `start_server_on()` binds and serves it in the background.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use router::triage_router;
pub use server::{start_server_on, ServerSession, TriageServer};
pub use types::ApiContext;
