//! Heterogeneous image references.

use std::path::{Path, PathBuf};

use crate::model::{AnnotateImageRequest, Image};
use crate::observability::metrics;

const FILE_SCHEME: &str = "file://";

/// Anything the annotate helpers accept as "an image".
#[derive(Debug, Clone, PartialEq)]
pub enum ImageInput {
    /// Raw image bytes, sent inline.
    Bytes(Vec<u8>),
    /// Local file, read and inlined before sending.
    Path(PathBuf),
    /// Remote image the service fetches itself (`https://`, `gs://`).
    Uri(String),
    /// A fully or partially built request.
    Request(AnnotateImageRequest),
}

impl ImageInput {
    /// Guess whether a string names a local file or a remote image.
    pub fn parse(reference: &str) -> Self {
        if let Some(path) = reference.strip_prefix(FILE_SCHEME) {
            return ImageInput::Path(PathBuf::from(path));
        }
        if reference.contains("://") {
            ImageInput::Uri(reference.to_string())
        } else {
            ImageInput::Path(PathBuf::from(reference))
        }
    }

    /// Short label used for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ImageInput::Bytes(_) => "bytes",
            ImageInput::Path(_) => "path",
            ImageInput::Uri(_) => "uri",
            ImageInput::Request(_) => "request",
        }
    }

    /// Convert to request form without recording it as a normalized input.
    ///
    /// Use this to pre-build a request that a client call will normalize
    /// again; [`to_request`] is the counted entry point.
    pub fn into_request(self) -> AnnotateImageRequest {
        match self {
            ImageInput::Bytes(bytes) => AnnotateImageRequest::new(Image::from_bytes(&bytes)),
            ImageInput::Path(path) => AnnotateImageRequest::new(Image::from_path(path)),
            ImageInput::Uri(uri) => AnnotateImageRequest::new(Image::from_uri(uri)),
            ImageInput::Request(request) => request,
        }
    }
}

impl From<&str> for ImageInput {
    fn from(reference: &str) -> Self {
        ImageInput::parse(reference)
    }
}

impl From<String> for ImageInput {
    fn from(reference: String) -> Self {
        ImageInput::parse(&reference)
    }
}

impl From<PathBuf> for ImageInput {
    fn from(path: PathBuf) -> Self {
        ImageInput::Path(path)
    }
}

impl From<&Path> for ImageInput {
    fn from(path: &Path) -> Self {
        ImageInput::Path(path.to_path_buf())
    }
}

impl From<Vec<u8>> for ImageInput {
    fn from(bytes: Vec<u8>) -> Self {
        ImageInput::Bytes(bytes)
    }
}

impl From<&[u8]> for ImageInput {
    fn from(bytes: &[u8]) -> Self {
        ImageInput::Bytes(bytes.to_vec())
    }
}

impl From<Image> for ImageInput {
    fn from(image: Image) -> Self {
        ImageInput::Request(AnnotateImageRequest::new(image))
    }
}

impl From<AnnotateImageRequest> for ImageInput {
    fn from(request: AnnotateImageRequest) -> Self {
        ImageInput::Request(request)
    }
}

/// Turn any image reference into request form.
///
/// Paths end up in `image.source.filename` and are only read later by
/// [`coerce`](crate::request::coerce()).
pub fn to_request(input: ImageInput) -> AnnotateImageRequest {
    metrics::record_image_normalized(input.kind());
    input.into_request()
}
