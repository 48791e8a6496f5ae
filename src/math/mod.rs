pub mod bezier_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Returns `v` scaled to unit length.
///
/// Vectors shorter than [`TOLERANCE`] collapse to the zero vector instead of
/// dividing by a near-zero length.
#[must_use]
pub fn normalize_or_zero(v: Vector2) -> Vector2 {
    let len = v.norm();
    if len < TOLERANCE {
        Vector2::zeros()
    } else {
        v / len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn normalize_zero_vector_returns_zero() {
        let n = normalize_or_zero(Vector2::zeros());
        assert!(n.norm() < TOL, "n={n:?}");
    }

    #[test]
    fn normalize_below_tolerance_returns_zero() {
        let n = normalize_or_zero(Vector2::new(1e-12, -1e-12));
        assert!(n.norm() < TOL, "n={n:?}");
    }

    #[test]
    fn normalize_returns_unit_length() {
        let n = normalize_or_zero(Vector2::new(3.0, 4.0));
        assert!((n.norm() - 1.0).abs() < TOL, "norm={}", n.norm());
    }

    #[test]
    fn normalize_preserves_direction() {
        let v = Vector2::new(-7.5, 2.25);
        let n = normalize_or_zero(v);
        assert!(n.dot(&v) > 0.0);
    }
}
