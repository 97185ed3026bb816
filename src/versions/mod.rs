//! API versions and the features each one exposes.
//!
//! # Responsibilities
//! - Name the supported API versions (`v1`, `v1p1beta1`, ...)
//! - Map each version to its feature set
//! - Gate single-feature helpers at compile time via marker types
//!
//! # Design Decisions
//! - One table (`ApiVersion::features`) is the source of truth; the marker
//!   types delegate to it for runtime checks
//! - Capability traits are only implemented for versions that carry the
//!   feature, so unsupported helpers do not exist on those clients

pub mod markers;
pub mod table;

pub use markers::{SupportsObjectLocalization, SupportsProductSearch, Version, V1, V1p1beta1, V1p2beta1, V1p3beta1, V1p4beta1};
pub use table::ApiVersion;
