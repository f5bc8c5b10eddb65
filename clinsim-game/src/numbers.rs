//! Numeric conversion helpers centralizing safe numeric casts.

use num_traits::cast::cast;

/// Round a vitals-scale reading to the nearest integer, saturating at
/// the i32 range and mapping NaN to 0.
#[must_use]
pub fn round_f64_to_i32(value: f64) -> i32 {
    if value.is_nan() {
        return 0;
    }
    let bounded = value.clamp(f64::from(i32::MIN), f64::from(i32::MAX));
    cast::<f64, i32>(bounded.round()).unwrap_or(0)
}

/// Round a temperature-style reading to one decimal place.
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounders_cover_ranges() {
        assert_eq!(round_f64_to_i32(1.6), 2);
        assert_eq!(round_f64_to_i32(f64::NAN), 0);
        assert_eq!(round_f64_to_i32(f64::from(i32::MAX) * 2.0), i32::MAX);
    }

    #[test]
    fn tenth_rounding_behaves() {
        assert!((round_to_tenth(37.8349) - 37.8).abs() < f64::EPSILON);
        assert!((round_to_tenth(36.95) - 37.0).abs() < f64::EPSILON);
        assert!((round_to_tenth(f64::NAN) - 0.0).abs() < f64::EPSILON);
    }
}
