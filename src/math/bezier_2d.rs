//! Cubic Bezier polynomial arithmetic.
//!
//! Free functions over the Bernstein form:
//! `B(t) = (1-t)^3*p0 + 3*(1-t)^2*t*p1 + 3*(1-t)*t^2*p2 + t^3*p3`.
//!
//! All functions are total over real `t`; callers restrict to `[0, 1]`.

use super::{Point2, Vector2};

/// Evaluates the cubic Bezier polynomial at parameter `t`.
///
/// Endpoint interpolation is exact: `t = 0` yields `p0` and `t = 1`
/// yields `p3` without rounding.
#[must_use]
pub fn cubic_point(t: f64, p0: Point2, p1: Point2, p2: Point2, p3: Point2) -> Point2 {
    let u = 1.0 - t;
    let b0 = u * u * u;
    let b1 = 3.0 * u * u * t;
    let b2 = 3.0 * u * t * t;
    let b3 = t * t * t;
    Point2::new(
        b0 * p0.x + b1 * p1.x + b2 * p2.x + b3 * p3.x,
        b0 * p0.y + b1 * p1.y + b2 * p2.y + b3 * p3.y,
    )
}

/// Evaluates the cubic Bezier derivative at parameter `t`.
///
/// `B'(t) = 3*(1-t)^2*(p1-p0) + 6*(1-t)*t*(p2-p1) + 3*t^2*(p3-p2)`.
/// The result is the raw hodograph value, not normalized.
#[must_use]
pub fn cubic_derivative(t: f64, p0: Point2, p1: Point2, p2: Point2, p3: Point2) -> Vector2 {
    let u = 1.0 - t;
    let d0 = 3.0 * u * u;
    let d1 = 6.0 * u * t;
    let d2 = 3.0 * t * t;
    Vector2::new(
        d0 * (p1.x - p0.x) + d1 * (p2.x - p1.x) + d2 * (p3.x - p2.x),
        d0 * (p1.y - p0.y) + d1 * (p2.y - p1.y) + d2 * (p3.y - p2.y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    fn polygon() -> (Point2, Point2, Point2, Point2) {
        (
            Point2::new(200.0, 300.0),
            Point2::new(350.0, 200.0),
            Point2::new(650.0, 400.0),
            Point2::new(800.0, 300.0),
        )
    }

    #[test]
    fn endpoint_interpolation_is_exact() {
        let (p0, p1, p2, p3) = polygon();
        let start = cubic_point(0.0, p0, p1, p2, p3);
        let end = cubic_point(1.0, p0, p1, p2, p3);
        assert!((start - p0).norm() < TOL, "start={start:?}");
        assert!((end - p3).norm() < TOL, "end={end:?}");
    }

    #[test]
    fn degenerate_polygon_collapses_to_point() {
        let p = Point2::new(12.5, -3.75);
        for t in [0.0, 0.25, 0.5, 0.9, 1.0] {
            let b = cubic_point(t, p, p, p, p);
            assert!((b - p).norm() < TOL, "t={t} b={b:?}");
        }
    }

    #[test]
    fn midpoint_matches_hand_computation() {
        // B(0.5) = 0.125*p0 + 0.375*p1 + 0.375*p2 + 0.125*p3 = (500, 300)
        // for the polygon above.
        let (p0, p1, p2, p3) = polygon();
        let mid = cubic_point(0.5, p0, p1, p2, p3);
        assert!((mid.x - 500.0).abs() < TOL, "mid={mid:?}");
        assert!((mid.y - 300.0).abs() < TOL, "mid={mid:?}");
    }

    #[test]
    fn derivative_at_start_is_chord_to_first_handle() {
        let (p0, p1, p2, p3) = polygon();
        let d = cubic_derivative(0.0, p0, p1, p2, p3);
        let expected = (p1 - p0) * 3.0;
        assert!((d - expected).norm() < TOL, "d={d:?}");
    }

    #[test]
    fn derivative_at_end_is_chord_from_last_handle() {
        let (p0, p1, p2, p3) = polygon();
        let d = cubic_derivative(1.0, p0, p1, p2, p3);
        let expected = (p3 - p2) * 3.0;
        assert!((d - expected).norm() < TOL, "d={d:?}");
    }

    #[test]
    fn derivative_matches_central_difference() {
        // Varied control polygons, no structure shared with the other tests.
        let polygons = [
            (
                Point2::new(0.0, 0.0),
                Point2::new(37.2, 91.4),
                Point2::new(-58.1, 22.9),
                Point2::new(104.6, -77.3),
            ),
            (
                Point2::new(-310.0, 45.5),
                Point2::new(12.8, -260.1),
                Point2::new(480.9, 305.2),
                Point2::new(95.0, 8.25),
            ),
            (
                Point2::new(200.0, 300.0),
                Point2::new(350.0, 200.0),
                Point2::new(650.0, 400.0),
                Point2::new(800.0, 300.0),
            ),
        ];

        let h = 1e-5;
        for (p0, p1, p2, p3) in polygons {
            for t in [0.1, 0.3, 0.5, 0.7, 0.9] {
                let analytic = cubic_derivative(t, p0, p1, p2, p3);
                let ahead = cubic_point(t + h, p0, p1, p2, p3);
                let behind = cubic_point(t - h, p0, p1, p2, p3);
                let numeric = (ahead - behind) / (2.0 * h);
                assert!(
                    (analytic - numeric).norm() < 1e-4,
                    "t={t} analytic={analytic:?} numeric={numeric:?}"
                );
            }
        }
    }
}
