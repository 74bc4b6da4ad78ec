//! Response compression layer.

use tower_http::compression::CompressionLayer;

/// Gzip for API responses and static assets.
pub fn build_compression_layer() -> CompressionLayer {
    CompressionLayer::new().gzip(true)
}
