use axum::Json;

use super::Payload;
use crate::models::{DeliveryRequest, EmissionResult};
use crate::services;

pub async fn predict_co2(Payload(request): Payload<DeliveryRequest>) -> Json<EmissionResult> {
    let result = services::predict(&request);

    tracing::debug!(
        distance = request.distance,
        vehicle = %request.vehicle_type,
        packaging = %request.packaging_type,
        co2_kg = result.predicted_co2_kg,
        eco_score = result.eco_score,
        "emission prediction"
    );

    Json(result)
}
