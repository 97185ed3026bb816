//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the endpoint is an absolute HTTP(S) URL
//! - Validate value ranges (timeouts > 0, batch size within service limits)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: VisionConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::VisionConfig;

/// Largest batch the service accepts in one synchronous call.
pub const SERVICE_MAX_BATCH_SIZE: usize = 16;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Dotted path of the offending field, e.g. `limits.max_batch_size`.
    pub field: &'static str,
    pub message: String,
}

/// Validate a parsed configuration.
pub fn validate_config(config: &VisionConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match url::Url::parse(&config.client.endpoint) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError {
            field: "client.endpoint",
            message: format!("unsupported scheme '{}'", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError {
            field: "client.endpoint",
            message: format!("invalid URL '{}': {}", config.client.endpoint, e),
        }),
    }

    if config.timeouts.connect_secs == 0 {
        errors.push(ValidationError {
            field: "timeouts.connect_secs",
            message: "must be greater than 0".to_string(),
        });
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError {
            field: "timeouts.request_secs",
            message: "must be greater than 0".to_string(),
        });
    }

    if !(1..=SERVICE_MAX_BATCH_SIZE).contains(&config.limits.max_batch_size) {
        errors.push(ValidationError {
            field: "limits.max_batch_size",
            message: format!("must be between 1 and {}", SERVICE_MAX_BATCH_SIZE),
        });
    }
    if config.limits.max_image_bytes == 0 {
        errors.push(ValidationError {
            field: "limits.max_image_bytes",
            message: "must be greater than 0".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
