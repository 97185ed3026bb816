//! Transports that carry batch annotate calls to the service.
//!
//! # Design Decisions
//! - One call per batch; no retries, no pagination
//! - Timeouts come from configuration and are enforced by the HTTP client
//! - Credentials are never logged

pub mod http;

pub use http::{Credentials, HttpAnnotator};
