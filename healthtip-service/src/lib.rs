pub mod config;
pub mod handlers;
pub mod prompts;
pub mod services;
pub mod startup;

use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::middleware::{
    request_id::request_id_middleware, security_headers::security_headers_middleware,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::startup::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthtip", post(handlers::healthtip::health_tip))
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .layer(from_fn(security_headers_middleware))
        .layer(from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
