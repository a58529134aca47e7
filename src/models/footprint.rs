use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FootprintRequest {
    #[validate(length(min = 1, message = "productName is required"))]
    pub product_name: String,

    #[validate(range(exclusive_min = 0.0, message = "distance must be positive"))]
    pub distance: f64,

    #[validate(range(exclusive_min = 0.0, message = "weight must be positive"))]
    pub weight: f64,

    #[validate(length(min = 1, message = "vehicleType is required"))]
    pub vehicle_type: String,

    #[validate(length(min = 1, message = "packagingType is required"))]
    pub packaging_type: String,

    #[validate(range(
        exclusive_min = 0.0,
        max = 100.0,
        message = "loadEfficiency must be between 1 and 100"
    ))]
    pub load_efficiency: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FootprintBreakdown {
    pub transport: f64,
    pub packaging: f64,
    pub efficiency_impact: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FootprintReport {
    pub success: bool,
    pub product_name: String,
    pub co2_footprint: f64,
    pub breakdown: FootprintBreakdown,
    pub unit: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> FootprintRequest {
        FootprintRequest {
            product_name: "Desk lamp".to_string(),
            distance: 120.0,
            weight: 2.0,
            vehicle_type: "Diesel".to_string(),
            packaging_type: "Recyclable".to_string(),
            load_efficiency: 80.0,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_distance_and_weight() {
        let mut req = request();
        req.distance = 0.0;
        req.weight = -1.0;
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("distance"));
        assert!(fields.contains_key("weight"));
    }

    #[test]
    fn test_rejects_efficiency_out_of_range() {
        let mut req = request();
        req.load_efficiency = 150.0;
        assert!(req.validate().is_err());

        req.load_efficiency = 0.0;
        assert!(req.validate().is_err());

        req.load_efficiency = 100.0;
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_product_name() {
        let mut req = request();
        req.product_name.clear();
        assert!(req.validate().is_err());
    }
}
