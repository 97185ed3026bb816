//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! client + request subsystems produce:
//!     → logging.rs (structured log events, request-id spans)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stderr via the fmt layer (binaries)
//!     → whatever metrics recorder the embedding application installs
//! ```
//!
//! # Design Decisions
//! - Each annotate call runs in a span carrying a UUID request id
//! - Metrics are cheap (no-op without a recorder)

pub mod logging;
pub mod metrics;
