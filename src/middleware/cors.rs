// ABOUTME: CORS middleware configuration for the public API
// ABOUTME: Mirrors the caller's origin, method, and headers so credentialed requests work from browsers

use crate::config::{CorsOrigins, ServerConfig};
use http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::warn;

/// Configure CORS for the API
///
/// With `CORS_ALLOWED_ORIGINS="*"` (the default) every origin is accepted.
/// Credentials are allowed, so instead of literal `*` responses the layer
/// echoes the request's origin, method, and headers.
///
/// ```bash
/// # Allow all origins
/// export CORS_ALLOWED_ORIGINS="*"
///
/// # Allow specific origins
/// export CORS_ALLOWED_ORIGINS="https://app.example.com,http://localhost:3000"
/// ```
#[must_use]
pub fn setup_cors(config: &ServerConfig) -> CorsLayer {
    let allow_origin = match &config.cors_origins {
        CorsOrigins::Any => AllowOrigin::mirror_request(),
        CorsOrigins::List(origins) => {
            let values: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| {
                    HeaderValue::from_str(origin)
                        .inspect_err(|e| warn!(cors.origin = %origin, "Ignoring invalid origin: {e}"))
                        .ok()
                })
                .collect();

            if values.is_empty() {
                AllowOrigin::mirror_request()
            } else {
                AllowOrigin::list(values)
            }
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
