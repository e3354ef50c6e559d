// ABOUTME: HTTP middleware for request tracing and cross-origin access
// ABOUTME: Provides request ID spans and the CORS layer applied to every route

/// CORS layer construction
pub mod cors;
/// Request spans with correlation IDs
pub mod tracing;

pub use cors::setup_cors;
pub use tracing::{create_request_span, request_id};
