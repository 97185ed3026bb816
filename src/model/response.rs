//! Annotate response shapes.

use serde::{Deserialize, Serialize};

/// Per-image error reported inside an otherwise successful batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Status {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<serde_json::Value>,
}

/// Likelihood buckets used by face and safe-search annotations.
///
/// Ordering runs from `Unknown` (lowest) to `VeryLikely`, so
/// `likelihood >= Likelihood::Likely` reads naturally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Likelihood {
    VeryUnlikely,
    Unlikely,
    Possible,
    Likely,
    VeryLikely,
    /// `UNKNOWN` and any bucket this crate does not know yet.
    #[default]
    #[serde(other)]
    Unknown,
}

impl Likelihood {
    fn rank(self) -> u8 {
        match self {
            Likelihood::Unknown => 0,
            Likelihood::VeryUnlikely => 1,
            Likelihood::Unlikely => 2,
            Likelihood::Possible => 3,
            Likelihood::Likely => 4,
            Likelihood::VeryLikely => 5,
        }
    }
}

impl PartialOrd for Likelihood {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Likelihood {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

/// Label, landmark, logo and text detections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntityAnnotation {
    /// Knowledge Graph entity id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    pub description: String,
    pub score: f32,
    pub topicality: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_poly: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FaceAnnotation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_poly: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fd_bounding_poly: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub landmarks: Vec<serde_json::Value>,
    pub roll_angle: f32,
    pub pan_angle: f32,
    pub tilt_angle: f32,
    pub detection_confidence: f32,
    pub landmarking_confidence: f32,
    pub joy_likelihood: Likelihood,
    pub sorrow_likelihood: Likelihood,
    pub anger_likelihood: Likelihood,
    pub surprise_likelihood: Likelihood,
    pub under_exposed_likelihood: Likelihood,
    pub blurred_likelihood: Likelihood,
    pub headwear_likelihood: Likelihood,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocalizedObjectAnnotation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    pub name: String,
    pub score: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_poly: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SafeSearchAnnotation {
    pub adult: Likelihood,
    pub spoof: Likelihood,
    pub medical: Likelihood,
    pub violence: Likelihood,
    pub racy: Likelihood,
}

/// OCR output with page structure (document text detection).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextAnnotation {
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WebEntity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    pub score: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WebLabel {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WebDetection {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub web_entities: Vec<WebEntity>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub full_matching_images: Vec<serde_json::Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub partial_matching_images: Vec<serde_json::Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pages_with_matching_images: Vec<serde_json::Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub visually_similar_images: Vec<serde_json::Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub best_guess_labels: Vec<WebLabel>,
}

/// Results for one image of a batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnnotateImageResponse {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub face_annotations: Vec<FaceAnnotation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub landmark_annotations: Vec<EntityAnnotation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub logo_annotations: Vec<EntityAnnotation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub label_annotations: Vec<EntityAnnotation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub text_annotations: Vec<EntityAnnotation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub localized_object_annotations: Vec<LocalizedObjectAnnotation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_text_annotation: Option<TextAnnotation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safe_search_annotation: Option<SafeSearchAnnotation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_properties_annotation: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop_hints_annotation: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_detection: Option<WebDetection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_search_results: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Status>,
}

impl AnnotateImageResponse {
    /// True when the service reported a per-image failure.
    pub fn is_error(&self) -> bool {
        self.error.as_ref().is_some_and(|s| s.code != 0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchAnnotateImagesResponse {
    pub responses: Vec<AnnotateImageResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_label_response() {
        let body = r#"{
            "responses": [{
                "labelAnnotations": [
                    {"mid": "/m/01yrx", "description": "Cat", "score": 0.98, "topicality": 0.98}
                ],
                "safeSearchAnnotation": {"adult": "VERY_UNLIKELY", "racy": "POSSIBLE"}
            }]
        }"#;
        let parsed: BatchAnnotateImagesResponse = serde_json::from_str(body).unwrap();
        let response = &parsed.responses[0];
        assert_eq!(response.label_annotations[0].description, "Cat");
        assert_eq!(response.label_annotations[0].mid.as_deref(), Some("/m/01yrx"));

        let safe = response.safe_search_annotation.as_ref().unwrap();
        assert_eq!(safe.adult, Likelihood::VeryUnlikely);
        assert_eq!(safe.racy, Likelihood::Possible);
        assert_eq!(safe.violence, Likelihood::Unknown);
        assert!(!response.is_error());
    }

    #[test]
    fn test_per_image_error() {
        let body = r#"{"responses": [{"error": {"code": 7, "message": "We can not access the URL currently."}}]}"#;
        let parsed: BatchAnnotateImagesResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.responses[0].is_error());
        assert_eq!(parsed.responses[0].error.as_ref().unwrap().code, 7);
    }

    #[test]
    fn test_unknown_likelihood_value_falls_back() {
        let safe: SafeSearchAnnotation = serde_json::from_str(r#"{"adult": "SOMEWHAT"}"#).unwrap();
        assert_eq!(safe.adult, Likelihood::Unknown);

        let safe: SafeSearchAnnotation = serde_json::from_str(r#"{"adult": "UNKNOWN"}"#).unwrap();
        assert_eq!(safe.adult, Likelihood::Unknown);
        assert_eq!(serde_json::to_value(Likelihood::Unknown).unwrap(), "UNKNOWN");
        assert_eq!(serde_json::to_value(Likelihood::VeryLikely).unwrap(), "VERY_LIKELY");
    }

    #[test]
    fn test_likelihood_ordering() {
        let ascending = [
            Likelihood::Unknown,
            Likelihood::VeryUnlikely,
            Likelihood::Unlikely,
            Likelihood::Possible,
            Likelihood::Likely,
            Likelihood::VeryLikely,
        ];
        for pair in ascending.windows(2) {
            assert!(pair[0] < pair[1], "{:?} should sort below {:?}", pair[0], pair[1]);
        }

        let mut shuffled = vec![Likelihood::Likely, Likelihood::Unknown, Likelihood::VeryUnlikely];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![Likelihood::Unknown, Likelihood::VeryUnlikely, Likelihood::Likely]
        );
        assert_eq!(Likelihood::default(), Likelihood::Unknown);
    }
}
