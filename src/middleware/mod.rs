//! Middleware del sistema
//!
//! CORS y trazas de peticiones HTTP.

pub mod cors;

pub use cors::*;

use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::TraceLayer;

/// Trazas por petición con `tracing`
pub fn trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
}
