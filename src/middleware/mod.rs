// ABOUTME: HTTP middleware for CORS and request tracing
// ABOUTME: Provides the CORS layer and request ID generation plus per-request spans

/// Cross-origin resource sharing configuration
pub mod cors;
/// Request IDs and request spans
pub mod tracing;

pub use cors::setup_cors;
pub use self::tracing::{create_request_span, PrefixedRequestId, REQUEST_ID_HEADER};
