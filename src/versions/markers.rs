//! Compile-time version markers.

use crate::versions::table::ApiVersion;

/// A concrete API version a client is bound to.
pub trait Version: Send + Sync + 'static {
    const VERSION: ApiVersion;
}

/// Versions that expose `OBJECT_LOCALIZATION`.
pub trait SupportsObjectLocalization: Version {}

/// Versions that expose `PRODUCT_SEARCH`.
pub trait SupportsProductSearch: Version {}

#[derive(Debug, Clone, Copy, Default)]
pub struct V1;

#[derive(Debug, Clone, Copy, Default)]
pub struct V1p1beta1;

#[derive(Debug, Clone, Copy, Default)]
pub struct V1p2beta1;

#[derive(Debug, Clone, Copy, Default)]
pub struct V1p3beta1;

#[derive(Debug, Clone, Copy, Default)]
pub struct V1p4beta1;

impl Version for V1 {
    const VERSION: ApiVersion = ApiVersion::V1;
}

impl Version for V1p1beta1 {
    const VERSION: ApiVersion = ApiVersion::V1p1beta1;
}

impl Version for V1p2beta1 {
    const VERSION: ApiVersion = ApiVersion::V1p2beta1;
}

impl Version for V1p3beta1 {
    const VERSION: ApiVersion = ApiVersion::V1p3beta1;
}

impl Version for V1p4beta1 {
    const VERSION: ApiVersion = ApiVersion::V1p4beta1;
}

impl SupportsObjectLocalization for V1 {}
impl SupportsObjectLocalization for V1p3beta1 {}
impl SupportsObjectLocalization for V1p4beta1 {}

impl SupportsProductSearch for V1p3beta1 {}
impl SupportsProductSearch for V1p4beta1 {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FeatureType;

    fn object_localization<V: SupportsObjectLocalization>() -> ApiVersion {
        V::VERSION
    }

    fn product_search<V: SupportsProductSearch>() -> ApiVersion {
        V::VERSION
    }

    #[test]
    fn test_markers_agree_with_table() {
        for version in [object_localization::<V1>(), object_localization::<V1p3beta1>(), object_localization::<V1p4beta1>()] {
            assert!(version.supports(FeatureType::ObjectLocalization));
        }
        for version in [product_search::<V1p3beta1>(), product_search::<V1p4beta1>()] {
            assert!(version.supports(FeatureType::ProductSearch));
        }
        assert_eq!(V1p1beta1::VERSION, ApiVersion::V1p1beta1);
        assert_eq!(V1p2beta1::VERSION, ApiVersion::V1p2beta1);
    }
}
