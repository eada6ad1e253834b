//! Router HTTP de la aplicación

pub mod search_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;

use crate::filters::{
    AddressFilter, BoxFilter, ClientFilter, ContactFilter, TrackingFilter, VehicleFilter,
    YardFilter, ZoneFilter,
};
use crate::middleware::{cors_layer, trace_layer};
use crate::state::AppState;
use search_routes::create_search_router;

/// Rutas de la API, con CORS y trazas
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .route("/health", get(health))
        .nest("/api/vehicles", create_search_router::<VehicleFilter>())
        .nest("/api/clients", create_search_router::<ClientFilter>())
        .nest("/api/addresses", create_search_router::<AddressFilter>())
        .nest("/api/contacts", create_search_router::<ContactFilter>())
        .nest("/api/yards", create_search_router::<YardFilter>())
        .nest("/api/zones", create_search_router::<ZoneFilter>())
        .nest("/api/boxes", create_search_router::<BoxFilter>())
        .nest("/api/tracking", create_search_router::<TrackingFilter>())
        .layer(trace_layer())
        .layer(cors)
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
