//! REST transport for the batch annotate call.
//!
//! # Responsibilities
//! - POST `{endpoint}/{version}/images:annotate` with a JSON body
//! - Attach an API key or bearer token
//! - Turn the service's error envelope into `VisionError::Api`

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

use crate::client::ImageAnnotator;
use crate::config::schema::{AuthConfig, TimeoutConfig, VisionConfig};
use crate::error::{VisionError, VisionResult};
use crate::model::{BatchAnnotateImagesRequest, BatchAnnotateImagesResponse};
use crate::versions::ApiVersion;

/// How requests are authenticated.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Sent as the `key` query parameter.
    ApiKey(String),
    /// Sent as `Authorization: Bearer <token>`.
    Bearer(String),
    /// No credentials (local emulators, tests).
    Anonymous,
}

impl Credentials {
    /// Resolve credentials from configuration and the environment.
    pub fn from_config(auth: &AuthConfig) -> Self {
        Self::resolve(auth, |name| std::env::var(name).ok())
    }

    fn resolve(auth: &AuthConfig, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(key) = auth.api_key.as_ref().filter(|k| !k.is_empty()) {
            return Credentials::ApiKey(key.clone());
        }
        if let Some(key) = auth
            .api_key_env
            .as_deref()
            .and_then(&lookup)
            .filter(|k| !k.is_empty())
        {
            return Credentials::ApiKey(key);
        }
        if let Some(token) = auth
            .bearer_token_env
            .as_deref()
            .and_then(&lookup)
            .filter(|t| !t.is_empty())
        {
            return Credentials::Bearer(token);
        }
        Credentials::Anonymous
    }

    fn kind(&self) -> &'static str {
        match self {
            Credentials::ApiKey(_) => "api_key",
            Credentials::Bearer(_) => "bearer",
            Credentials::Anonymous => "anonymous",
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.kind())
    }
}

/// Error envelope returned by Google APIs.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

/// `ImageAnnotator` backed by the REST API.
#[derive(Clone)]
pub struct HttpAnnotator {
    client: Client,
    url: Url,
    version: ApiVersion,
    credentials: Credentials,
}

impl HttpAnnotator {
    /// Create a transport for `version` at `endpoint`.
    pub fn new(
        endpoint: &str,
        version: ApiVersion,
        credentials: Credentials,
        timeouts: &TimeoutConfig,
    ) -> VisionResult<Self> {
        let url = annotate_url(endpoint, version)?;
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .timeout(Duration::from_secs(timeouts.request_secs))
            .build()?;

        Ok(Self {
            client,
            url,
            version,
            credentials,
        })
    }

    /// Create a transport from a loaded configuration.
    pub fn from_config(config: &VisionConfig, version: ApiVersion) -> VisionResult<Self> {
        let credentials = Credentials::from_config(&config.auth);
        if credentials == Credentials::Anonymous {
            tracing::warn!("No Vision API credentials configured; sending unauthenticated requests");
        }

        let annotator = Self::new(&config.client.endpoint, version, credentials, &config.timeouts)?;
        tracing::info!(
            url = %annotator.url,
            auth = annotator.credentials.kind(),
            "Vision HTTP transport initialized"
        );
        Ok(annotator)
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn version(&self) -> ApiVersion {
        self.version
    }
}

#[async_trait]
impl ImageAnnotator for HttpAnnotator {
    async fn batch_annotate_images(
        &self,
        request: BatchAnnotateImagesRequest,
    ) -> VisionResult<BatchAnnotateImagesResponse> {
        let mut builder = self.client.post(self.url.clone()).json(&request);
        builder = match &self.credentials {
            Credentials::ApiKey(key) => builder.query(&[("key", key)]),
            Credentials::Bearer(token) => builder.bearer_auth(token),
            Credentials::Anonymous => builder,
        };

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = parse_error_message(&text);
            tracing::error!(status = %status, error = %message, "Vision API request failed");
            return Err(VisionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<BatchAnnotateImagesResponse>().await?)
    }
}

impl std::fmt::Debug for HttpAnnotator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpAnnotator")
            .field("url", &self.url.as_str())
            .field("version", &self.version)
            .field("credentials", &self.credentials)
            .finish()
    }
}

fn annotate_url(endpoint: &str, version: ApiVersion) -> VisionResult<Url> {
    let raw = format!("{}/{}/images:annotate", endpoint.trim_end_matches('/'), version);
    Url::parse(&raw).map_err(|e| VisionError::Config(format!("Invalid endpoint '{}': {}", endpoint, e)))
}

fn parse_error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => match envelope.error.status {
            Some(status) => format!("{}: {}", status, envelope.error.message),
            None => envelope.error.message,
        },
        Err(_) => body.trim().to_string(),
    }
}
