//! Wire shapes of the image annotation service.
//!
//! # Data Flow
//! ```text
//! ImageInput (bytes / path / URI / request)
//!     → request::to_request     (AnnotateImageRequest)
//!     → request::coerce         (file contents inlined as base64)
//!     → BatchAnnotateImagesRequest { requests: [..] }
//!     → ImageAnnotator
//!     → BatchAnnotateImagesResponse { responses: [..] }
//! ```
//!
//! # Design Decisions
//! - Field names follow the REST surface (camelCase on the wire)
//! - `ImageSource::filename` is local-only and never serialized
//! - Deeply nested payloads the helpers never inspect stay as JSON values

pub mod feature;
pub mod request;
pub mod response;

pub use feature::{Feature, FeatureType};
pub use request::{AnnotateImageRequest, BatchAnnotateImagesRequest, Image, ImageContext, ImageSource};
pub use response::{
    AnnotateImageResponse, BatchAnnotateImagesResponse, EntityAnnotation, FaceAnnotation,
    Likelihood, LocalizedObjectAnnotation, SafeSearchAnnotation, Status, TextAnnotation,
    WebDetection,
};
