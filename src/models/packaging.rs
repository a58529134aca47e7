use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct PackagingRequest {
    pub product_weight: f64,
    pub volume: f64,
    pub fragile: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackagingAdvice {
    pub best_packaging_type: String,
    pub co2_saved_estimate: f64,
    pub reasoning: String,
}
