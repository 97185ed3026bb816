//! Annotate helpers layered over an image annotator.
//!
//! # Data Flow
//! ```text
//! VisionClient<V, A>
//!     → request::to_request / single_feature / coerce
//!     → BatchAnnotateImagesRequest
//!     → A: ImageAnnotator (HTTP transport or a test double)
//!     → responses[0] (or all responses for a batch)
//! ```
//!
//! # Design Decisions
//! - The annotator is the only seam that touches the network
//! - Errors from the annotator are returned as-is
//! - Per-image errors inside a response are returned to the caller, not raised

pub mod annotator;
pub mod vision;

pub use annotator::ImageAnnotator;
pub use vision::{ClientOptions, VisionClient};
