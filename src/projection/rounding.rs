//! Decimal rounding used for every monthly value and for display
//!
//! Rounds the exact binary value of the input, with halves going away from
//! zero. Multiplying by 100 first would misround values sitting just under a
//! half cent.

/// Round to the nearest cent
pub fn round_to_cents(value: f64) -> f64 {
    round_half_away(value, 2)
}

/// Round to `places` decimals
pub fn round_half_away(value: f64, places: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    // A stored value is an exact half at the next decimal only when it is an
    // odd multiple of 2^-(places + 1) (x.125, x.375, ... for cents), where
    // value * 10^places is also exact.
    let pow2 = 2f64.powi(places);
    if (value * pow2 * 2.0).fract() == 0.0 && (value * pow2).fract() != 0.0 {
        let scale = 10f64.powi(places);
        return (value * scale).round() / scale;
    }

    // Formatting rounds the exact decimal expansion, which is never a tie here
    format!("{:.*}", places.max(0) as usize, value).parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_values() {
        assert_eq!(round_to_cents(14333.333333333334), 14333.33);
        assert_eq!(round_to_cents(416.6666666666667), 416.67);
        assert_eq!(round_to_cents(50000.0), 50000.0);
        assert_eq!(round_to_cents(-250.004), -250.0);
    }

    #[test]
    fn test_binary_representation_wins() {
        // 1.005 is stored as 1.00499999999999989...
        assert_eq!(round_to_cents(1.005), 1.0);
        // 2.675 is stored as 2.67499999999999982..., but 2.675 * 100 == 267.5
        assert_eq!(round_to_cents(2.675), 2.67);
    }

    #[test]
    fn test_exact_halves_round_away_from_zero() {
        assert_eq!(round_to_cents(0.125), 0.13);
        assert_eq!(round_to_cents(2.375), 2.38);
        assert_eq!(round_to_cents(-0.125), -0.13);
        assert_eq!(round_to_cents(1000.625), 1000.63);
    }

    #[test]
    fn test_one_decimal_halves() {
        assert_eq!(round_half_away(2884.25, 1), 2884.3);
        assert_eq!(round_half_away(-12.75, 1), -12.8);
        // 0.35 is stored as 0.34999999999999997...
        assert_eq!(round_half_away(0.35, 1), 0.3);
        assert_eq!(round_half_away(2884.461125, 1), 2884.5);
    }

    #[test]
    fn test_non_finite_passthrough() {
        assert!(round_to_cents(f64::NAN).is_nan());
        assert_eq!(round_to_cents(f64::INFINITY), f64::INFINITY);
    }
}
