//! API middleware.
//!
//! Only an access logger: the service is unauthenticated and stateless.

pub mod audit;
