//! Request normalization.
//!
//! # Data Flow
//! ```text
//! caller input (bytes / path / URL / request)
//!     → input.rs    (ImageInput → AnnotateImageRequest)
//!     → features.rs (single-feature methods pin the feature list)
//!     → coerce.rs   (reject missing image, inline local files)
//!     → ready for a batch call
//! ```
//!
//! # Design Decisions
//! - A string without `://` (or with `file://`) is a local path, anything
//!   else is a URL handed to the service untouched
//! - Local files are read at coercion time, never at construction time
//! - Pre-built requests pass through; only their image is inspected

pub mod coerce;
pub mod features;
pub mod input;

pub use coerce::coerce;
pub use features::single_feature;
pub use input::{to_request, ImageInput};
