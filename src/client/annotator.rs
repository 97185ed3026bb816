//! The batch annotate call the helpers are built on.

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::VisionResult;
use crate::model::{BatchAnnotateImagesRequest, BatchAnnotateImagesResponse};

/// Something that can run a batch annotate call.
#[async_trait]
pub trait ImageAnnotator: Send + Sync {
    async fn batch_annotate_images(
        &self,
        request: BatchAnnotateImagesRequest,
    ) -> VisionResult<BatchAnnotateImagesResponse>;
}

#[async_trait]
impl<T: ImageAnnotator + ?Sized> ImageAnnotator for Arc<T> {
    async fn batch_annotate_images(
        &self,
        request: BatchAnnotateImagesRequest,
    ) -> VisionResult<BatchAnnotateImagesResponse> {
        (**self).batch_annotate_images(request).await
    }
}
