//! Numeric helpers.

/// Round to 2 decimal places, half-up.
///
/// Exact halves round toward positive infinity, so `-0.125` becomes `-0.12`
/// and `0.125` becomes `0.13`.
pub fn round2(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(0.56), 0.56);
        assert_eq!(round2(0.8 * 0.7), 0.56);
        assert_eq!(round2(0.5 * 0.7), 0.35);
        assert_eq!(round2(1.0 / 3.0), 0.33);
        assert_eq!(round2(2.0 / 3.0), 0.67);
        assert_eq!(round2(-1.0), -1.0);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_round2_halves_go_up() {
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.12);
    }
}
