//! Annotate request shapes.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::model::feature::Feature;

/// An image to annotate: either inline content or a reference to one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// Base64-encoded image bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ImageSource>,
}

impl Image {
    /// Inline image from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            content: Some(STANDARD.encode(bytes)),
            source: None,
        }
    }

    /// Image fetched by the service from a URL (`https://`, `gs://`).
    pub fn from_uri(uri: impl Into<String>) -> Self {
        Self {
            content: None,
            source: Some(ImageSource {
                image_uri: Some(uri.into()),
                ..Default::default()
            }),
        }
    }

    /// Image read from local disk before the request is sent.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            content: None,
            source: Some(ImageSource {
                filename: Some(path.into()),
                ..Default::default()
            }),
        }
    }

    /// Local file still to be inlined, if any.
    pub fn filename(&self) -> Option<&PathBuf> {
        self.source.as_ref().and_then(|s| s.filename.as_ref())
    }
}

/// Where the service should fetch the image from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSource {
    /// Public HTTP(S) URL or Cloud Storage URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<String>,

    /// Cloud Storage URI (`gs://bucket/object`). Superseded by `image_uri`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gcs_image_uri: Option<String>,

    /// Local path; replaced by inline content before sending.
    #[serde(skip)]
    pub filename: Option<PathBuf>,
}

/// Optional hints passed along with a request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageContext {
    /// BCP-47 language hints for text detection.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub language_hints: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat_long_rect: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop_hints_params: Option<CropHintsParams>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_detection_params: Option<WebDetectionParams>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_search_params: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropHintsParams {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aspect_ratios: Vec<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebDetectionParams {
    #[serde(default)]
    pub include_geo_results: bool,
}

/// One image plus the features to run on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateImageRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,

    #[serde(default)]
    pub features: Vec<Feature>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_context: Option<ImageContext>,
}

impl AnnotateImageRequest {
    pub fn new(image: Image) -> Self {
        Self {
            image: Some(image),
            features: Vec::new(),
            image_context: None,
        }
    }

    pub fn with_feature(mut self, feature: impl Into<Feature>) -> Self {
        self.features.push(feature.into());
        self
    }

    pub fn with_image_context(mut self, context: ImageContext) -> Self {
        self.image_context = Some(context);
        self
    }
}

/// A batch of annotate requests sent in one call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchAnnotateImagesRequest {
    pub requests: Vec<AnnotateImageRequest>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FeatureType;

    #[test]
    fn test_bytes_are_base64_encoded() {
        let image = Image::from_bytes(b"hello");
        assert_eq!(image.content.as_deref(), Some("aGVsbG8="));
        assert!(image.source.is_none());
    }

    #[test]
    fn test_filename_is_never_serialized() {
        let request = AnnotateImageRequest::new(Image::from_path("/tmp/cat.jpg"));
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"image": {"source": {}}, "features": []}));
    }

    #[test]
    fn test_uri_request_wire_format() {
        let request = AnnotateImageRequest::new(Image::from_uri("gs://bucket/dog.png"))
            .with_feature(FeatureType::LabelDetection);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "image": {"source": {"imageUri": "gs://bucket/dog.png"}},
                "features": [{"type": "LABEL_DETECTION"}]
            })
        );
    }

    #[test]
    fn test_request_without_image_deserializes() {
        let request: AnnotateImageRequest =
            serde_json::from_str(r#"{"features": [{"type": "LOGO_DETECTION"}]}"#).unwrap();
        assert!(request.image.is_none());
        assert_eq!(request.features.len(), 1);
    }
}
