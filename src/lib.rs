//! Helpers over the image annotation API.
//!
//! Accepts image bytes, local paths, URLs or prebuilt requests, turns them
//! into batch annotate requests, and exposes one-feature shortcuts
//! (`label_detection`, `face_detection`, ...) only on API versions that
//! support the feature.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod observability;
pub mod request;
pub mod transport;
pub mod versions;

pub use client::{ImageAnnotator, VisionClient};
pub use config::VisionConfig;
pub use error::{VisionError, VisionResult};
pub use request::ImageInput;
pub use transport::HttpAnnotator;
pub use versions::ApiVersion;
