use crate::math::bezier_2d::{cubic_derivative, cubic_point};
use crate::math::{normalize_or_zero, Point2, Vector2, TOLERANCE};

use super::{Curve, CurveDomain};

/// A cubic Bezier curve in the plane.
///
/// Defined by four control points: `p0` and `p3` are the interpolated
/// endpoints, `p1` and `p2` shape the interior. The curve is a value
/// snapshot; a host rebuilds one per frame from whatever drives the
/// interior points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    p0: Point2,
    p1: Point2,
    p2: Point2,
    p3: Point2,
}

impl CubicBezier {
    /// Creates a new cubic Bezier from its four control points.
    ///
    /// Any four finite points form a valid curve, including fully
    /// degenerate ones.
    #[must_use]
    pub fn new(p0: Point2, p1: Point2, p2: Point2, p3: Point2) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Returns the start endpoint.
    #[must_use]
    pub fn p0(&self) -> &Point2 {
        &self.p0
    }

    /// Returns the first interior control point.
    #[must_use]
    pub fn p1(&self) -> &Point2 {
        &self.p1
    }

    /// Returns the second interior control point.
    #[must_use]
    pub fn p2(&self) -> &Point2 {
        &self.p2
    }

    /// Returns the end endpoint.
    #[must_use]
    pub fn p3(&self) -> &Point2 {
        &self.p3
    }

    /// Returns the control polygon in order.
    #[must_use]
    pub fn control_polygon(&self) -> [Point2; 4] {
        [self.p0, self.p1, self.p2, self.p3]
    }
}

impl Curve for CubicBezier {
    fn evaluate(&self, t: f64) -> Point2 {
        cubic_point(t, self.p0, self.p1, self.p2, self.p3)
    }

    fn derivative(&self, t: f64) -> Vector2 {
        cubic_derivative(t, self.p0, self.p1, self.p2, self.p3)
    }

    fn tangent(&self, t: f64) -> Vector2 {
        normalize_or_zero(self.derivative(t))
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, 1.0)
    }

    fn is_closed(&self) -> bool {
        (self.p3 - self.p0).norm() < TOLERANCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    fn curve() -> CubicBezier {
        CubicBezier::new(
            Point2::new(200.0, 300.0),
            Point2::new(350.0, 200.0),
            Point2::new(650.0, 400.0),
            Point2::new(800.0, 300.0),
        )
    }

    #[test]
    fn evaluate_interpolates_endpoints() {
        let c = curve();
        assert!((c.evaluate(0.0) - *c.p0()).norm() < TOL);
        assert!((c.evaluate(1.0) - *c.p3()).norm() < TOL);
    }

    #[test]
    fn tangent_is_unit_length() {
        let c = curve();
        for t in [0.0, 0.2, 0.5, 0.8, 1.0] {
            let tan = c.tangent(t);
            assert!((tan.norm() - 1.0).abs() < TOL, "t={t} tan={tan:?}");
        }
    }

    #[test]
    fn tangent_of_degenerate_curve_is_zero() {
        let p = Point2::new(4.0, 4.0);
        let c = CubicBezier::new(p, p, p, p);
        assert!(c.tangent(0.5).norm() < TOL);
    }

    #[test]
    fn domain_is_unit_interval() {
        let d = curve().domain();
        assert!((d.t_min - 0.0).abs() < TOL);
        assert!((d.t_max - 1.0).abs() < TOL);
    }

    #[test]
    fn open_curve_is_not_closed() {
        assert!(!curve().is_closed());
    }

    #[test]
    fn coincident_endpoints_close_the_curve() {
        let c = CubicBezier::new(
            Point2::new(0.0, 0.0),
            Point2::new(50.0, 80.0),
            Point2::new(-50.0, 80.0),
            Point2::new(0.0, 0.0),
        );
        assert!(c.is_closed());
    }
}
