//! Feature pinning for single-feature helpers.

use crate::error::{VisionError, VisionResult};
use crate::model::{AnnotateImageRequest, Feature, FeatureType};

/// Pin a request to exactly one feature type.
///
/// An empty feature list becomes `[{type: feature}]`. Explicit features of
/// the same type are kept (so `maxResults` survives); any other type is
/// rejected.
pub fn single_feature(
    mut request: AnnotateImageRequest,
    feature: FeatureType,
) -> VisionResult<AnnotateImageRequest> {
    if request.features.is_empty() {
        request.features.push(Feature::new(feature));
        return Ok(request);
    }

    if let Some(other) = request.features.iter().find(|f| f.feature_type != feature) {
        return Err(VisionError::ExplicitFeatures {
            expected: feature,
            found: other.feature_type,
        });
    }

    Ok(request)
}
