//! HTTP service data structures.

/// Shared state injected into every request handler.
pub mod http_service_data;
