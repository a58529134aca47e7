/// Rounds `value` to `places` decimal digits using the exact binary value of
/// the float, so `0.075` (stored just below the tie) becomes `0.07`.
///
/// Whole-number rounding resolves exact ties to the even neighbour.
pub fn round_to(value: f64, places: i32) -> f64 {
    if places <= 0 {
        let scale = 10f64.powi(-places);
        return (value / scale).round_ties_even() * scale;
    }

    // `{:.N}` formatting is correctly rounded on the exact value.
    format!("{:.*}", places as usize, value)
        .parse()
        .unwrap_or(value)
}

/// Shorthand for the two-decimal rounding used on every CO2 figure.
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_uses_exact_binary_value() {
        // 0.005 is stored just above the tie, 0.075 just below it
        assert_eq!(round2(0.005), 0.01);
        assert_eq!(round2(0.075), 0.07);
        assert_eq!(round2(0.015), 0.01);
        assert_eq!(round2(11.71875), 11.72);
    }

    #[test]
    fn test_round2_keeps_sign() {
        assert_eq!(round2(-3.14159), -3.14);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_round2_passes_non_finite_through() {
        assert!(round2(f64::NAN).is_nan());
        assert_eq!(round2(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_round_to_zero_places() {
        assert_eq!(round_to(82.5, 0), 82.0);
        assert_eq!(round_to(83.5, 0), 84.0);
        assert_eq!(round_to(70.4, 0), 70.0);
    }
}
