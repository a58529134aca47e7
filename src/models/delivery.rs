use serde::{Deserialize, Serialize};

use super::EcoBadge;

/// Vehicle category used for the emission multiplier lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleType {
    Electric,
    Bicycle,
    Petrol,
    Diesel,
    Other,
}

impl VehicleType {
    /// Case-insensitive match; anything unrecognised becomes `Other`.
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "ev" | "electric" => VehicleType::Electric,
            "bike" | "bicycle" => VehicleType::Bicycle,
            "petrol" => VehicleType::Petrol,
            "diesel" => VehicleType::Diesel,
            _ => VehicleType::Other,
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            VehicleType::Electric => 0.05,
            VehicleType::Bicycle => 0.02,
            VehicleType::Petrol => 0.15,
            VehicleType::Diesel => 0.18,
            VehicleType::Other => 0.15,
        }
    }

    pub fn burns_fuel(&self) -> bool {
        matches!(self, VehicleType::Petrol | VehicleType::Diesel)
    }
}

/// Packaging category used for the emission multiplier lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackagingType {
    SingleUse,
    Reusable,
    Circular,
    Other,
}

impl PackagingType {
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "single-use" => PackagingType::SingleUse,
            "reusable" => PackagingType::Reusable,
            "circular" => PackagingType::Circular,
            _ => PackagingType::Other,
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            PackagingType::SingleUse => 1.0,
            PackagingType::Reusable => 0.4,
            PackagingType::Circular => 0.3,
            PackagingType::Other => 1.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeliveryRequest {
    pub distance: f64,
    pub weight: f64,
    pub vehicle_type: String,
    pub packaging_type: String,
    pub load_efficiency: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmissionResult {
    pub predicted_co2_kg: f64,
    pub eco_score: i32,
    pub advice: String,
    pub eco_badge: EcoBadge,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_lookup_is_case_insensitive() {
        assert_eq!(VehicleType::from_label("PETROL"), VehicleType::Petrol);
        assert_eq!(VehicleType::from_label("Ev"), VehicleType::Electric);
        assert_eq!(VehicleType::from_label("Bike"), VehicleType::Bicycle);
    }

    #[test]
    fn test_unknown_vehicle_uses_default_multiplier() {
        let vehicle = VehicleType::from_label("hovercraft");
        assert_eq!(vehicle, VehicleType::Other);
        assert_eq!(vehicle.multiplier(), 0.15);
        assert!(!vehicle.burns_fuel());
    }

    #[test]
    fn test_unknown_packaging_uses_default_multiplier() {
        let packaging = PackagingType::from_label("styrofoam");
        assert_eq!(packaging, PackagingType::Other);
        assert_eq!(packaging.multiplier(), 1.0);
        assert_eq!(PackagingType::from_label("Single-Use"), PackagingType::SingleUse);
    }
}
