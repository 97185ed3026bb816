//! Version-bound annotate client.

use futures_util::future::try_join_all;
use std::marker::PhantomData;
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

use crate::client::annotator::ImageAnnotator;
use crate::config::schema::{LimitsConfig, VisionConfig};
use crate::error::{VisionError, VisionResult};
use crate::model::{
    AnnotateImageRequest, AnnotateImageResponse, BatchAnnotateImagesRequest,
    BatchAnnotateImagesResponse, FeatureType,
};
use crate::observability::metrics;
use crate::request::{coerce, single_feature, to_request, ImageInput};
use crate::transport::HttpAnnotator;
use crate::versions::{SupportsObjectLocalization, SupportsProductSearch, Version};

/// Local limits applied while building requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientOptions {
    /// Largest local file that will be inlined. `None` disables the check.
    pub max_image_bytes: Option<u64>,
    /// Largest batch `annotate_images` will send in one call.
    pub max_batch_size: usize,
}

impl Default for ClientOptions {
    fn default() -> Self {
        LimitsConfig::default().into()
    }
}

impl From<LimitsConfig> for ClientOptions {
    fn from(limits: LimitsConfig) -> Self {
        Self {
            max_image_bytes: Some(limits.max_image_bytes),
            max_batch_size: limits.max_batch_size,
        }
    }
}

/// Annotate client bound to API version `V`.
///
/// Single-feature helpers for features `V` lacks are not defined:
///
/// ```compile_fail
/// use vision_helpers::versions::V1;
/// use vision_helpers::{HttpAnnotator, VisionClient};
///
/// async fn search(client: &VisionClient<V1, HttpAnnotator>) {
///     let _ = client.product_search("gs://bucket/shoe.jpg").await;
/// }
/// ```
///
/// ```compile_fail
/// use vision_helpers::versions::V1p1beta1;
/// use vision_helpers::{HttpAnnotator, VisionClient};
///
/// async fn objects(client: &VisionClient<V1p1beta1, HttpAnnotator>) {
///     let _ = client.object_localization("gs://bucket/shoe.jpg").await;
/// }
/// ```
///
/// Versions that carry the feature expose them:
///
/// ```no_run
/// use vision_helpers::versions::{V1, V1p3beta1};
/// use vision_helpers::{HttpAnnotator, VisionClient};
///
/// async fn gated(
///     v1: &VisionClient<V1, HttpAnnotator>,
///     beta: &VisionClient<V1p3beta1, HttpAnnotator>,
/// ) {
///     let _ = v1.object_localization("gs://bucket/shoe.jpg").await;
///     let _ = beta.object_localization("gs://bucket/shoe.jpg").await;
///     let _ = beta.product_search("gs://bucket/shoe.jpg").await;
/// }
/// ```
pub struct VisionClient<V: Version, A: ImageAnnotator> {
    annotator: A,
    options: ClientOptions,
    _version: PhantomData<fn() -> V>,
}

impl<V: Version> VisionClient<V, HttpAnnotator> {
    /// Build a client talking HTTP to the configured endpoint.
    ///
    /// The version path comes from `V`, not from `config.client.api_version`.
    pub fn from_config(config: &VisionConfig) -> VisionResult<Self> {
        let annotator = HttpAnnotator::from_config(config, V::VERSION)?;
        Ok(Self::with_options(annotator, config.limits.clone().into()))
    }
}

impl<V: Version, A: ImageAnnotator> VisionClient<V, A> {
    pub fn new(annotator: A) -> Self {
        Self::with_options(annotator, ClientOptions::default())
    }

    pub fn with_options(annotator: A, options: ClientOptions) -> Self {
        Self {
            annotator,
            options,
            _version: PhantomData,
        }
    }

    pub fn version(&self) -> crate::versions::ApiVersion {
        V::VERSION
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    pub fn annotator(&self) -> &A {
        &self.annotator
    }

    /// Forward a batch request to the annotator unchanged.
    pub async fn batch_annotate_images(
        &self,
        request: BatchAnnotateImagesRequest,
    ) -> VisionResult<BatchAnnotateImagesResponse> {
        let start = Instant::now();
        let images = request.requests.len();
        let result = self.annotator.batch_annotate_images(request).await;

        match &result {
            Ok(response) => {
                metrics::record_annotate(V::VERSION, "ok", start);
                tracing::debug!(
                    images,
                    responses = response.responses.len(),
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Batch annotate complete"
                );
            }
            Err(e) => {
                metrics::record_annotate(V::VERSION, "error", start);
                tracing::warn!(images, error = %e, "Batch annotate failed");
            }
        }

        result
    }

    /// Annotate one image.
    ///
    /// Accepts bytes, a path, a URL or a request; the features to run come
    /// from the request (an input without a request runs none).
    pub async fn annotate_image(
        &self,
        input: impl Into<ImageInput>,
    ) -> VisionResult<AnnotateImageResponse> {
        let span = tracing::info_span!(
            "annotate_image",
            request_id = %Uuid::new_v4(),
            version = %V::VERSION,
        );

        self.annotate_request(to_request(input.into()))
            .instrument(span)
            .await
    }

    /// Send an already normalized request as a batch of one.
    async fn annotate_request(
        &self,
        request: AnnotateImageRequest,
    ) -> VisionResult<AnnotateImageResponse> {
        let request = coerce(request, self.options.max_image_bytes).await?;

        let batch = BatchAnnotateImagesRequest {
            requests: vec![request],
        };
        let response = self
            .batch_annotate_images(batch)
            .await?
            .responses
            .into_iter()
            .next()
            .ok_or(VisionError::EmptyResponse)?;

        log_image_error(0, &response);
        Ok(response)
    }

    /// Annotate several images in one batch call, keeping input order.
    pub async fn annotate_images<I>(&self, inputs: I) -> VisionResult<Vec<AnnotateImageResponse>>
    where
        I: IntoIterator,
        I::Item: Into<ImageInput>,
    {
        let requests: Vec<AnnotateImageRequest> = inputs
            .into_iter()
            .map(|input| to_request(input.into()))
            .collect();

        if requests.is_empty() {
            return Ok(Vec::new());
        }
        if requests.len() > self.options.max_batch_size {
            return Err(VisionError::BatchTooLarge {
                size: requests.len(),
                max: self.options.max_batch_size,
            });
        }

        let span = tracing::info_span!(
            "annotate_images",
            request_id = %Uuid::new_v4(),
            version = %V::VERSION,
            images = requests.len(),
        );

        async move {
            let max_image_bytes = self.options.max_image_bytes;
            let requests = try_join_all(
                requests
                    .into_iter()
                    .map(|request| coerce(request, max_image_bytes)),
            )
            .await?;

            let expected = requests.len();
            let response = self
                .batch_annotate_images(BatchAnnotateImagesRequest { requests })
                .await?;
            if response.responses.len() != expected {
                return Err(VisionError::ResponseCountMismatch {
                    expected,
                    actual: response.responses.len(),
                });
            }

            for (i, image_response) in response.responses.iter().enumerate() {
                log_image_error(i, image_response);
            }
            Ok(response.responses)
        }
        .instrument(span)
        .await
    }

    /// Run a single feature chosen at runtime.
    ///
    /// Fails with [`VisionError::UnsupportedFeature`] when `V` lacks it.
    pub async fn annotate_feature(
        &self,
        input: impl Into<ImageInput>,
        feature: FeatureType,
    ) -> VisionResult<AnnotateImageResponse> {
        if !V::VERSION.supports(feature) {
            return Err(VisionError::UnsupportedFeature {
                feature,
                version: V::VERSION,
            });
        }
        self.run_single_feature(input.into(), feature).await
    }

    async fn run_single_feature(
        &self,
        input: ImageInput,
        feature: FeatureType,
    ) -> VisionResult<AnnotateImageResponse> {
        let span = tracing::info_span!(
            "annotate_image",
            request_id = %Uuid::new_v4(),
            version = %V::VERSION,
            feature = %feature,
        );

        async move {
            let request = single_feature(to_request(input), feature)?;
            self.annotate_request(request).await
        }
        .instrument(span)
        .await
    }

    pub async fn face_detection(
        &self,
        input: impl Into<ImageInput>,
    ) -> VisionResult<AnnotateImageResponse> {
        self.run_single_feature(input.into(), FeatureType::FaceDetection).await
    }

    pub async fn landmark_detection(
        &self,
        input: impl Into<ImageInput>,
    ) -> VisionResult<AnnotateImageResponse> {
        self.run_single_feature(input.into(), FeatureType::LandmarkDetection).await
    }

    pub async fn logo_detection(
        &self,
        input: impl Into<ImageInput>,
    ) -> VisionResult<AnnotateImageResponse> {
        self.run_single_feature(input.into(), FeatureType::LogoDetection).await
    }

    pub async fn label_detection(
        &self,
        input: impl Into<ImageInput>,
    ) -> VisionResult<AnnotateImageResponse> {
        self.run_single_feature(input.into(), FeatureType::LabelDetection).await
    }

    pub async fn text_detection(
        &self,
        input: impl Into<ImageInput>,
    ) -> VisionResult<AnnotateImageResponse> {
        self.run_single_feature(input.into(), FeatureType::TextDetection).await
    }

    /// Dense-text OCR with page/block structure in `full_text_annotation`.
    pub async fn document_text_detection(
        &self,
        input: impl Into<ImageInput>,
    ) -> VisionResult<AnnotateImageResponse> {
        self.run_single_feature(input.into(), FeatureType::DocumentTextDetection).await
    }

    pub async fn safe_search_detection(
        &self,
        input: impl Into<ImageInput>,
    ) -> VisionResult<AnnotateImageResponse> {
        self.run_single_feature(input.into(), FeatureType::SafeSearchDetection).await
    }

    pub async fn image_properties(
        &self,
        input: impl Into<ImageInput>,
    ) -> VisionResult<AnnotateImageResponse> {
        self.run_single_feature(input.into(), FeatureType::ImageProperties).await
    }

    pub async fn crop_hints(
        &self,
        input: impl Into<ImageInput>,
    ) -> VisionResult<AnnotateImageResponse> {
        self.run_single_feature(input.into(), FeatureType::CropHints).await
    }

    pub async fn web_detection(
        &self,
        input: impl Into<ImageInput>,
    ) -> VisionResult<AnnotateImageResponse> {
        self.run_single_feature(input.into(), FeatureType::WebDetection).await
    }
}

impl<V: SupportsObjectLocalization, A: ImageAnnotator> VisionClient<V, A> {
    pub async fn object_localization(
        &self,
        input: impl Into<ImageInput>,
    ) -> VisionResult<AnnotateImageResponse> {
        self.run_single_feature(input.into(), FeatureType::ObjectLocalization).await
    }
}

impl<V: SupportsProductSearch, A: ImageAnnotator> VisionClient<V, A> {
    /// Product search; pass `product_search_params` through the request's
    /// image context.
    pub async fn product_search(
        &self,
        input: impl Into<ImageInput>,
    ) -> VisionResult<AnnotateImageResponse> {
        self.run_single_feature(input.into(), FeatureType::ProductSearch).await
    }
}

impl<V: Version, A: ImageAnnotator> std::fmt::Debug for VisionClient<V, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisionClient")
            .field("version", &V::VERSION)
            .field("options", &self.options)
            .finish()
    }
}

fn log_image_error(index: usize, response: &AnnotateImageResponse) {
    if let Some(status) = response.error.as_ref().filter(|_| response.is_error()) {
        tracing::warn!(
            index,
            code = status.code,
            message = %status.message,
            "Image annotation returned an error"
        );
    }
}
