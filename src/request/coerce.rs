//! Final shaping of a request before it is sent.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::{VisionError, VisionResult};
use crate::model::AnnotateImageRequest;

/// Make a request ready for the wire.
///
/// - no `image` field: [`VisionError::MissingImage`]
/// - `image.source.filename` set: the file is read, its bytes become
///   `image.content` and `image.source` is dropped
/// - anything else is returned untouched
///
/// `max_image_bytes` caps local file size; `None` disables the check.
pub async fn coerce(
    mut request: AnnotateImageRequest,
    max_image_bytes: Option<u64>,
) -> VisionResult<AnnotateImageRequest> {
    let Some(image) = request.image.as_mut() else {
        return Err(VisionError::MissingImage);
    };

    let Some(path) = image.filename().cloned() else {
        return Ok(request);
    };

    if let Some(limit) = max_image_bytes {
        let size = tokio::fs::metadata(&path)
            .await
            .map_err(|source| VisionError::ReadImage { path: path.clone(), source })?
            .len();
        if size > limit {
            return Err(VisionError::ImageTooLarge { path, size, limit });
        }
    }

    let blob = tokio::fs::read(&path)
        .await
        .map_err(|source| VisionError::ReadImage { path: path.clone(), source })?;

    tracing::debug!(path = %path.display(), bytes = blob.len(), "Inlined local image");

    image.content = Some(STANDARD.encode(&blob));
    image.source = None;
    Ok(request)
}
