//! Feature requests.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of detection to run on an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeatureType {
    TypeUnspecified,
    FaceDetection,
    LandmarkDetection,
    LogoDetection,
    LabelDetection,
    TextDetection,
    DocumentTextDetection,
    SafeSearchDetection,
    ImageProperties,
    CropHints,
    WebDetection,
    ProductSearch,
    ObjectLocalization,
}

impl FeatureType {
    /// Every concrete feature, in declaration order.
    pub const ALL: [FeatureType; 12] = [
        FeatureType::FaceDetection,
        FeatureType::LandmarkDetection,
        FeatureType::LogoDetection,
        FeatureType::LabelDetection,
        FeatureType::TextDetection,
        FeatureType::DocumentTextDetection,
        FeatureType::SafeSearchDetection,
        FeatureType::ImageProperties,
        FeatureType::CropHints,
        FeatureType::WebDetection,
        FeatureType::ProductSearch,
        FeatureType::ObjectLocalization,
    ];

    /// The wire name, e.g. `LABEL_DETECTION`.
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureType::TypeUnspecified => "TYPE_UNSPECIFIED",
            FeatureType::FaceDetection => "FACE_DETECTION",
            FeatureType::LandmarkDetection => "LANDMARK_DETECTION",
            FeatureType::LogoDetection => "LOGO_DETECTION",
            FeatureType::LabelDetection => "LABEL_DETECTION",
            FeatureType::TextDetection => "TEXT_DETECTION",
            FeatureType::DocumentTextDetection => "DOCUMENT_TEXT_DETECTION",
            FeatureType::SafeSearchDetection => "SAFE_SEARCH_DETECTION",
            FeatureType::ImageProperties => "IMAGE_PROPERTIES",
            FeatureType::CropHints => "CROP_HINTS",
            FeatureType::WebDetection => "WEB_DETECTION",
            FeatureType::ProductSearch => "PRODUCT_SEARCH",
            FeatureType::ObjectLocalization => "OBJECT_LOCALIZATION",
        }
    }
}

impl fmt::Display for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the wire name in any case, with `-` or `_` separators.
impl FromStr for FeatureType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_").to_ascii_uppercase();
        if normalized == "TYPE_UNSPECIFIED" {
            return Ok(FeatureType::TypeUnspecified);
        }
        FeatureType::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == normalized)
            .ok_or_else(|| format!("unknown feature type '{}'", s))
    }
}

/// A single detection request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    #[serde(rename = "type")]
    pub feature_type: FeatureType,

    /// Maximum number of results of this type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,

    /// Model to use, e.g. `builtin/stable` or `builtin/latest`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl Feature {
    pub fn new(feature_type: FeatureType) -> Self {
        Self {
            feature_type,
            max_results: None,
            model: None,
        }
    }

    pub fn with_max_results(mut self, max_results: i32) -> Self {
        self.max_results = Some(max_results);
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

impl From<FeatureType> for Feature {
    fn from(feature_type: FeatureType) -> Self {
        Feature::new(feature_type)
    }
}
