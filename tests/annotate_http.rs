//! End-to-end annotate calls against a mock service.

use serde_json::json;
use std::io::Write;
use vision_helpers::config::schema::TimeoutConfig;
use vision_helpers::model::{AnnotateImageRequest, Feature, FeatureType, Image};
use vision_helpers::transport::{Credentials, HttpAnnotator};
use vision_helpers::versions::{V1, V1p3beta1};
use vision_helpers::{ApiVersion, VisionClient, VisionConfig, VisionError};

mod common;

fn http_client<V: vision_helpers::versions::Version>(
    endpoint: &str,
    credentials: Credentials,
) -> VisionClient<V, HttpAnnotator> {
    let annotator =
        HttpAnnotator::new(endpoint, V::VERSION, credentials, &TimeoutConfig::default()).unwrap();
    VisionClient::new(annotator)
}

#[tokio::test]
async fn test_label_detection_over_http() {
    let mock = common::start_mock_vision(
        200,
        json!({"responses": [{"labelAnnotations": [{"description": "Cat", "score": 0.97}]}]}),
    )
    .await;

    let client = http_client::<V1>(&mock.endpoint(), Credentials::ApiKey("test-key".into()));
    let response = client
        .label_detection("https://example.com/cat.jpg")
        .await
        .unwrap();
    assert_eq!(response.label_annotations[0].description, "Cat");

    let seen = mock.last();
    assert_eq!(seen.path, "/v1/images:annotate");
    assert_eq!(seen.query.as_deref(), Some("key=test-key"));
    assert!(seen.authorization.is_none());
    assert_eq!(
        seen.body,
        json!({
            "requests": [{
                "image": {"source": {"imageUri": "https://example.com/cat.jpg"}},
                "features": [{"type": "LABEL_DETECTION"}]
            }]
        })
    );
}

#[tokio::test]
async fn test_local_file_sent_inline() {
    let mock = common::start_mock_vision(200, json!({"responses": [{}]})).await;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"jpeg bytes").unwrap();

    let client = http_client::<V1>(&mock.endpoint(), Credentials::Anonymous);
    let request = AnnotateImageRequest::new(Image::from_path(file.path()))
        .with_feature(Feature::new(FeatureType::TextDetection).with_max_results(2));
    client.annotate_image(request).await.unwrap();

    let body = mock.last().body;
    assert_eq!(body["requests"][0]["image"], json!({"content": "anBlZyBieXRlcw=="}));
    assert_eq!(
        body["requests"][0]["features"],
        json!([{"type": "TEXT_DETECTION", "maxResults": 2}])
    );
}

#[tokio::test]
async fn test_bearer_token_and_version_path() {
    let mock = common::start_mock_vision(200, json!({"responses": [{}]})).await;

    let client = http_client::<V1p3beta1>(&mock.endpoint(), Credentials::Bearer("tok".into()));
    client.product_search("gs://bucket/shoe.jpg").await.unwrap();

    let seen = mock.last();
    assert_eq!(seen.path, "/v1p3beta1/images:annotate");
    assert_eq!(seen.authorization.as_deref(), Some("Bearer tok"));
    assert!(seen.query.is_none());
    assert_eq!(
        seen.body["requests"][0]["features"],
        json!([{"type": "PRODUCT_SEARCH"}])
    );
}

#[tokio::test]
async fn test_service_error_envelope() {
    let mock = common::start_mock_vision(
        403,
        json!({"error": {"code": 403, "message": "The caller does not have permission", "status": "PERMISSION_DENIED"}}),
    )
    .await;

    let client = http_client::<V1>(&mock.endpoint(), Credentials::ApiKey("bad".into()));
    let err = client.face_detection(vec![1u8, 2, 3]).await.unwrap_err();
    match err {
        VisionError::Api { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "PERMISSION_DENIED: The caller does not have permission");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_per_image_error_is_returned() {
    let mock = common::start_mock_vision(
        200,
        json!({"responses": [{"error": {"code": 3, "message": "Bad image data."}}]}),
    )
    .await;

    let client = http_client::<V1>(&mock.endpoint(), Credentials::Anonymous);
    let response = client.safe_search_detection(vec![0u8; 4]).await.unwrap();
    assert!(response.is_error());
    assert_eq!(response.error.unwrap().message, "Bad image data.");
}

#[tokio::test]
async fn test_batch_of_images() {
    let mock = common::start_mock_vision(
        200,
        json!({"responses": [
            {"logoAnnotations": [{"description": "first"}]},
            {"logoAnnotations": [{"description": "second"}]}
        ]}),
    )
    .await;

    let client = http_client::<V1>(&mock.endpoint(), Credentials::Anonymous);
    let requests = ["gs://b/1.png", "gs://b/2.png"].map(|uri| {
        AnnotateImageRequest::new(Image::from_uri(uri)).with_feature(FeatureType::LogoDetection)
    });
    let responses = client.annotate_images(requests).await.unwrap();

    assert_eq!(responses.len(), 2);
    assert_eq!(responses[1].logo_annotations[0].description, "second");
    assert_eq!(mock.requests().len(), 1);
    assert_eq!(mock.last().body["requests"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_missing_image_never_reaches_service() {
    let mock = common::start_mock_vision(200, json!({"responses": [{}]})).await;

    let client = http_client::<V1>(&mock.endpoint(), Credentials::Anonymous);
    let err = client
        .annotate_image(AnnotateImageRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, VisionError::MissingImage));
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_client_from_config() {
    let mock = common::start_mock_vision(200, json!({"responses": [{}]})).await;

    let mut config = VisionConfig::default();
    config.client.endpoint = mock.endpoint();
    config.client.api_version = ApiVersion::V1p1beta1;
    config.auth.api_key = Some("from-config".into());

    let client = VisionClient::<V1, HttpAnnotator>::from_config(&config).unwrap();
    assert_eq!(client.annotator().version(), ApiVersion::V1);
    client.web_detection("gs://b/page.png").await.unwrap();

    let seen = mock.last();
    assert_eq!(seen.path, "/v1/images:annotate");
    assert_eq!(seen.query.as_deref(), Some("key=from-config"));
}
