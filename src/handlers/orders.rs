use axum::{extract::State, Json};
use std::sync::Arc;

use super::{AppError, Payload};
use crate::models::{EcoSummary, NewOrder, Order};
use crate::services::{scoring, AppState};

/// Persists the order with the caller's `co2_value` and `eco_score`. Only the
/// badge is derived here.
pub async fn save_order(
    State(state): State<Arc<AppState>>,
    Payload(order): Payload<NewOrder>,
) -> Result<Json<Order>, AppError> {
    let recomputed = scoring::eco_score(order.co2_value, order.distance);
    if recomputed != order.eco_score {
        tracing::debug!(
            supplied = order.eco_score,
            recomputed,
            "submitted eco score disagrees with submitted co2 value"
        );
    }

    let order = state.store.insert(order).await?;
    tracing::info!(order_id = %order.id, eco_badge = %order.eco_badge, "order saved");

    Ok(Json(order))
}

pub async fn list_orders(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Order>>, AppError> {
    Ok(Json(state.store.list_all().await?))
}

pub async fn eco_summary(State(state): State<Arc<AppState>>) -> Result<Json<EcoSummary>, AppError> {
    Ok(Json(state.store.aggregate().await?))
}
