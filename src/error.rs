//! Error definitions shared by the annotate helpers.

use std::path::PathBuf;
use thiserror::Error;

use crate::model::FeatureType;
use crate::versions::ApiVersion;

/// Errors that can occur while building or sending an annotate request.
#[derive(Debug, Error)]
pub enum VisionError {
    /// The request carried no `image` field.
    #[error("No image present.")]
    MissingImage,

    /// A local image file could not be read.
    #[error("Failed to read image file {}: {source}", .path.display())]
    ReadImage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A local image file exceeds the configured size limit.
    #[error("Image file {} is {size} bytes, limit is {limit} bytes", .path.display())]
    ImageTooLarge { path: PathBuf, size: u64, limit: u64 },

    /// A single-feature method was called with a conflicting feature list.
    #[error(
        "Setting explicit features is not supported on this method. \
         Use the annotate_image method instead. (expected {expected}, got {found})"
    )]
    ExplicitFeatures {
        expected: FeatureType,
        found: FeatureType,
    },

    /// The selected API version does not expose the feature.
    #[error("Feature {feature} is not supported by API version {version}")]
    UnsupportedFeature {
        feature: FeatureType,
        version: ApiVersion,
    },

    /// The batch holds more images than a single call accepts.
    #[error("Batch of {size} images exceeds the maximum of {max}")]
    BatchTooLarge { size: usize, max: usize },

    /// The service answered a batch call without any responses.
    #[error("Annotate call returned no responses")]
    EmptyResponse,

    /// The service answered a batch with a different number of responses
    /// than images sent.
    #[error("Annotate call returned {actual} responses for {expected} images")]
    ResponseCountMismatch { expected: usize, actual: usize },

    /// The service rejected the call.
    #[error("Vision API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Transport failure talking to the service.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid client settings (endpoint, credentials).
    #[error("Client configuration error: {0}")]
    Config(String),
}

/// Result type for annotate operations.
pub type VisionResult<T> = Result<T, VisionError>;
