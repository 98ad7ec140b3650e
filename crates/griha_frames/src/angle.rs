//! Circular angle arithmetic on degrees.

/// Normalize an angle to [0, 360).
///
/// `rem_euclid` can round a tiny negative input up to exactly 360.0; that
/// case folds back to 0.0.
pub fn normalize_deg(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Shortest signed difference `b - a`, in (-180, 180].
pub fn circular_diff_deg(a: f64, b: f64) -> f64 {
    let d = normalize_deg(b - a);
    if d > 180.0 { d - 360.0 } else { d }
}

/// Forward (eastward) arc from `from` to `to`, in [0, 360).
pub fn arc_forward_deg(from: f64, to: f64) -> f64 {
    normalize_deg(to - from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_wraps_both_directions() {
        assert_eq!(normalize_deg(360.0), 0.0);
        assert!((normalize_deg(-30.0) - 330.0).abs() < 1e-12);
        assert!((normalize_deg(725.0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_never_returns_360() {
        for &x in &[-1e-15, -1e-14, -f64::EPSILON, -1e-300] {
            let n = normalize_deg(x);
            assert!((0.0..360.0).contains(&n), "normalize({x}) = {n}");
        }
    }

    #[test]
    fn diff_takes_short_way_round() {
        assert!((circular_diff_deg(350.0, 10.0) - 20.0).abs() < 1e-12);
        assert!((circular_diff_deg(10.0, 350.0) + 20.0).abs() < 1e-12);
        assert!((circular_diff_deg(0.0, 180.0) - 180.0).abs() < 1e-12);
        assert!((circular_diff_deg(180.0, 0.0) - 180.0).abs() < 1e-12);
    }

    #[test]
    fn forward_arc() {
        assert!((arc_forward_deg(300.0, 30.0) - 90.0).abs() < 1e-12);
        assert_eq!(arc_forward_deg(42.0, 42.0), 0.0);
    }
}
