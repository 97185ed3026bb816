//! Metrics collection.
//!
//! # Metrics
//! - `vision_annotate_requests_total` (counter): batch calls by version, outcome
//! - `vision_annotate_duration_seconds` (histogram): batch call latency
//! - `vision_images_normalized_total` (counter): image inputs by kind
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; binaries choose the exporter
//! - Without an installed recorder every call is a no-op

use std::time::Instant;

use crate::versions::ApiVersion;

/// Record one batch annotate call.
pub fn record_annotate(version: ApiVersion, outcome: &'static str, start: Instant) {
    ::metrics::counter!(
        "vision_annotate_requests_total",
        "version" => version.as_str(),
        "outcome" => outcome
    )
    .increment(1);

    ::metrics::histogram!(
        "vision_annotate_duration_seconds",
        "version" => version.as_str()
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record one image input turned into a request.
pub fn record_image_normalized(kind: &'static str) {
    ::metrics::counter!("vision_images_normalized_total", "kind" => kind).increment(1);
}
