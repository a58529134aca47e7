use crate::models::{PackagingType, VehicleType};
use crate::utils::round2;

/// Estimated CO2 mass in kg for one delivery.
///
/// Total over any numeric input: negative distances or weights and load
/// efficiencies above 200 % yield negative estimates and are returned as-is.
pub fn estimate(
    distance: f64,
    weight: f64,
    vehicle: VehicleType,
    packaging: PackagingType,
    load_efficiency: f64,
) -> f64 {
    let base = distance * weight * vehicle.multiplier() * packaging.multiplier();
    let efficiency_factor = 1.0 - load_efficiency / 200.0;
    round2(base * efficiency_factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VEHICLES: [VehicleType; 5] = [
        VehicleType::Electric,
        VehicleType::Bicycle,
        VehicleType::Petrol,
        VehicleType::Diesel,
        VehicleType::Other,
    ];
    const PACKAGINGS: [PackagingType; 4] = [
        PackagingType::SingleUse,
        PackagingType::Reusable,
        PackagingType::Circular,
        PackagingType::Other,
    ];

    #[test]
    fn test_reference_petrol_delivery() {
        let co2 = estimate(50.0, 2.5, VehicleType::Petrol, PackagingType::SingleUse, 75.0);
        assert_eq!(co2, 11.72);
    }

    #[test]
    fn test_electric_circular_delivery() {
        // 100 * 4 * 0.05 * 0.3 * (1 - 0.5)
        let co2 = estimate(100.0, 4.0, VehicleType::Electric, PackagingType::Circular, 100.0);
        assert_eq!(co2, 3.0);
    }

    #[test]
    fn test_small_estimates_round_on_stored_value() {
        // products land just above or just below the half-cent
        assert_eq!(estimate(1.0, 0.25, VehicleType::Bicycle, PackagingType::SingleUse, 0.0), 0.01);
        assert_eq!(estimate(1.0, 0.5, VehicleType::Electric, PackagingType::SingleUse, 0.0), 0.03);
        assert_eq!(estimate(1.0, 0.5, VehicleType::Petrol, PackagingType::SingleUse, 0.0), 0.07);
    }

    #[test]
    fn test_zero_distance_is_zero() {
        for vehicle in VEHICLES {
            for packaging in PACKAGINGS {
                for efficiency in [0.0, 50.0, 100.0, 200.0] {
                    assert_eq!(estimate(0.0, 12.0, vehicle, packaging, efficiency), 0.0);
                }
            }
        }
    }

    #[test]
    fn test_monotonic_in_distance_and_weight() {
        for vehicle in VEHICLES {
            for packaging in PACKAGINGS {
                let mut previous = f64::MIN;
                for step in 0..50 {
                    let co2 = estimate(step as f64 * 7.5, 3.0, vehicle, packaging, 60.0);
                    assert!(co2 >= previous, "distance {} regressed", step);
                    previous = co2;
                }

                let mut previous = f64::MIN;
                for step in 0..50 {
                    let co2 = estimate(40.0, step as f64 * 0.5, vehicle, packaging, 100.0);
                    assert!(co2 >= previous, "weight {} regressed", step);
                    previous = co2;
                }
            }
        }
    }

    #[test]
    fn test_efficiency_above_200_goes_negative() {
        let co2 = estimate(10.0, 10.0, VehicleType::Diesel, PackagingType::SingleUse, 300.0);
        // 18 * (1 - 1.5)
        assert_eq!(co2, -9.0);
    }

    #[test]
    fn test_negative_inputs_are_not_rejected() {
        let co2 = estimate(-10.0, 2.0, VehicleType::Petrol, PackagingType::SingleUse, 0.0);
        assert_eq!(co2, -3.0);
    }
}
