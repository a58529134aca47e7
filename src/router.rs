use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::cors::cors_layer;
use crate::services::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/api", get(handlers::health::root))
        .route("/api/", get(handlers::health::root))
        // Estimation
        .route("/api/predict_co2", post(handlers::emissions::predict_co2))
        .route("/api/optimize_packaging", post(handlers::packaging::optimize))
        .route("/api/calculate", post(handlers::footprint::calculate))
        // Orders
        .route("/api/save_order", post(handlers::orders::save_order))
        .route("/api/orders", get(handlers::orders::list_orders))
        .route("/api/eco_score", get(handlers::orders::eco_summary))
        // Health
        .route("/_health", get(handlers::health::health_check))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
