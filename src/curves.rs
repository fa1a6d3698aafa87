//! Snap curve.
//!
//! Maps the (scaled) deviation of a new sample from the smoothed value to the
//! weight used by the exponential moving average.

/// Snap factor for a scaled deviation `x >= 0`, in the range 0.0..=1.0.
///
/// Derived from the hyperbola `1 / x`, offset by one so that `x = 0` gives 1,
/// flipped with `1 - y` so it starts at 0 and rises toward 1, then doubled and
/// capped at 1:
///
/// `y = min(2 * (1 - 1 / (x + 1)), 1)`
///
/// - `x = 0` gives 0 (no movement, maximal smoothing)
/// - small `x` rises steeply
/// - `x >= 1` saturates at 1 (the new sample is taken as is)
///
/// NaN maps to 0.
#[inline]
pub fn snap_curve(x: f32) -> f32 {
    debug_assert!(!(x < 0.0), "snap curve input must be >= 0.0, got {}", x);

    if x.is_nan() {
        return 0.0;
    }

    let y = 1.0 / (x + 1.0);
    let y = (1.0 - y) * 2.0;

    if y > 1.0 { 1.0 } else { y }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_deviation_gives_zero() {
        assert_eq!(snap_curve(0.0), 0.0);
    }

    #[test]
    fn saturates_at_one() {
        assert_eq!(snap_curve(1.0), 1.0);
        assert_eq!(snap_curve(1000.0), 1.0);
    }

    #[test]
    fn nan_gives_zero() {
        assert_eq!(snap_curve(f32::NAN), 0.0);
        assert_eq!(snap_curve(f32::INFINITY * 0.0), 0.0);
    }

    #[test]
    fn half_way_point() {
        // 2 * (1 - 1/1.5) = 2/3
        assert!((snap_curve(0.5) - 2.0 / 3.0).abs() < 1e-6);
    }
}
