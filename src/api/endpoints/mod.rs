//! API endpoint handlers.
//!
//! Handlers stay thin: all triage logic lives in `crate::triage`.

pub mod analyze;
pub mod health;
