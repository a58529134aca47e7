//! Itemised footprint: transport and packaging emissions reported separately,
//! then scaled by how full the vehicle is.

use crate::models::footprint::{FootprintBreakdown, FootprintReport, FootprintRequest};
use crate::utils::round2;

pub const UNIT: &str = "kg CO₂";

/// kg CO2 per km travelled.
pub fn transport_factor(vehicle_type: &str) -> f64 {
    match vehicle_type.to_lowercase().as_str() {
        "electric vehicle (ev)" => 0.0,
        "hybrid" => 0.089,
        "diesel" => 0.171,
        // petrol and anything unrecognised
        _ => 0.192,
    }
}

/// kg CO2 per kg of product shipped.
pub fn packaging_factor(packaging_type: &str) -> f64 {
    match packaging_type.to_lowercase().as_str() {
        "recyclable" => 0.05,
        "reusable" => 0.02,
        _ => 0.1,
    }
}

/// Expects a request that has already passed `Validate`; `load_efficiency`
/// must be non-zero.
pub fn calculate(request: &FootprintRequest) -> FootprintReport {
    let transport = request.distance * transport_factor(&request.vehicle_type);
    let packaging = request.weight * packaging_factor(&request.packaging_type);
    let direct = transport + packaging;
    let total = direct / (request.load_efficiency / 100.0);

    FootprintReport {
        success: true,
        product_name: request.product_name.clone(),
        co2_footprint: round2(total),
        breakdown: FootprintBreakdown {
            transport: round2(transport),
            packaging: round2(packaging),
            efficiency_impact: round2(total - direct),
        },
        unit: UNIT,
    }
}
