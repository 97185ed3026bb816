//! Runtime version table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::model::FeatureType;

/// Features every version understands.
const BASE_FEATURES: &[FeatureType] = &[
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
];

const V1_FEATURES: &[FeatureType] = &[
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
    FeatureType::ObjectLocalization,
];

const PRODUCT_SEARCH_FEATURES: &[FeatureType] = &[
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

/// Version path segment of the annotation API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
    #[default]
    V1,
    V1p1beta1,
    V1p2beta1,
    V1p3beta1,
    V1p4beta1,
}

impl ApiVersion {
    pub const ALL: [ApiVersion; 5] = [
        ApiVersion::V1,
        ApiVersion::V1p1beta1,
        ApiVersion::V1p2beta1,
        ApiVersion::V1p3beta1,
        ApiVersion::V1p4beta1,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApiVersion::V1 => "v1",
            ApiVersion::V1p1beta1 => "v1p1beta1",
            ApiVersion::V1p2beta1 => "v1p2beta1",
            ApiVersion::V1p3beta1 => "v1p3beta1",
            ApiVersion::V1p4beta1 => "v1p4beta1",
        }
    }

    /// Features this version exposes single-feature helpers for.
    pub fn features(&self) -> &'static [FeatureType] {
        match self {
            ApiVersion::V1 => V1_FEATURES,
            ApiVersion::V1p1beta1 | ApiVersion::V1p2beta1 => BASE_FEATURES,
            ApiVersion::V1p3beta1 | ApiVersion::V1p4beta1 => PRODUCT_SEARCH_FEATURES,
        }
    }

    pub fn supports(&self, feature: FeatureType) -> bool {
        self.features().contains(&feature)
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ApiVersion::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == wanted)
            .ok_or_else(|| format!("unknown API version '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_features_everywhere() {
        for version in ApiVersion::ALL {
            for feature in BASE_FEATURES {
                assert!(version.supports(*feature), "{} should support {}", version, feature);
            }
            assert!(!version.supports(FeatureType::TypeUnspecified));
        }
    }

    #[test]
    fn test_object_localization_versions() {
        assert!(ApiVersion::V1.supports(FeatureType::ObjectLocalization));
        assert!(!ApiVersion::V1p1beta1.supports(FeatureType::ObjectLocalization));
        assert!(!ApiVersion::V1p2beta1.supports(FeatureType::ObjectLocalization));
        assert!(ApiVersion::V1p3beta1.supports(FeatureType::ObjectLocalization));
        assert!(ApiVersion::V1p4beta1.supports(FeatureType::ObjectLocalization));
    }

    #[test]
    fn test_product_search_versions() {
        assert!(!ApiVersion::V1.supports(FeatureType::ProductSearch));
        assert!(!ApiVersion::V1p2beta1.supports(FeatureType::ProductSearch));
        assert!(ApiVersion::V1p3beta1.supports(FeatureType::ProductSearch));
        assert!(ApiVersion::V1p4beta1.supports(FeatureType::ProductSearch));
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("V1P3BETA1".parse::<ApiVersion>().unwrap(), ApiVersion::V1p3beta1);
        assert_eq!(ApiVersion::V1p2beta1.to_string(), "v1p2beta1");
        assert!("v2".parse::<ApiVersion>().is_err());

        let json = serde_json::to_value(ApiVersion::V1p4beta1).unwrap();
        assert_eq!(json, serde_json::json!("v1p4beta1"));
    }
}
