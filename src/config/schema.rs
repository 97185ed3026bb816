//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the client.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::versions::ApiVersion;

/// Root configuration for the annotate client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct VisionConfig {
    /// Service endpoint and API version.
    pub client: ClientConfig,

    /// Credentials.
    pub auth: AuthConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Request building limits.
    pub limits: LimitsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Service endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the service (e.g., "https://vision.googleapis.com").
    pub endpoint: String,

    /// API version path segment.
    pub api_version: ApiVersion,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://vision.googleapis.com".to_string(),
            api_version: ApiVersion::V1,
        }
    }
}

/// Credentials used by the HTTP transport.
///
/// Precedence: `api_key`, then `api_key_env`, then `bearer_token_env`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Inline API key.
    pub api_key: Option<String>,

    /// Environment variable holding an API key.
    pub api_key_env: Option<String>,

    /// Environment variable holding a pre-issued OAuth access token.
    pub bearer_token_env: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: Some("GOOGLE_API_KEY".to_string()),
            bearer_token_env: None,
        }
    }
}

/// Timeout configuration for calls to the service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Connection establishment timeout in seconds.
    pub connect_secs: u64,

    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: 5,
            request_secs: 30,
        }
    }
}

/// Limits applied while building requests.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum images per batch call (the service accepts at most 16).
    pub max_batch_size: usize,

    /// Maximum size of a local image file in bytes.
    pub max_image_bytes: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_batch_size: 16,
            max_image_bytes: 20 * 1024 * 1024, // 20MB
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = VisionConfig::default();
        assert_eq!(config.client.endpoint, "https://vision.googleapis.com");
        assert_eq!(config.client.api_version, ApiVersion::V1);
        assert_eq!(config.auth.api_key_env.as_deref(), Some("GOOGLE_API_KEY"));
        assert_eq!(config.limits.max_batch_size, 16);
        assert_eq!(config.timeouts.request_secs, 30);
    }

    #[test]
    fn test_partial_toml() {
        let config: VisionConfig = toml::from_str(
            r#"
            [client]
            api_version = "v1p3beta1"

            [limits]
            max_batch_size = 4
            "#,
        )
        .unwrap();
        assert_eq!(config.client.api_version, ApiVersion::V1p3beta1);
        assert_eq!(config.client.endpoint, "https://vision.googleapis.com");
        assert_eq!(config.limits.max_batch_size, 4);
        assert_eq!(config.limits.max_image_bytes, 20 * 1024 * 1024);
    }
}
