mod cubic_bezier;

pub use cubic_bezier::CubicBezier;

use crate::math::{Point2, Vector2};

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }
}

/// Trait for parametric curves in the plane.
///
/// Every method is a total function of `t`: evaluation is plain polynomial
/// arithmetic with no failure modes, and degenerate tangents collapse to the
/// zero vector rather than signaling an error. Callers restrict `t` to
/// [`Curve::domain`]; values outside it still evaluate on the curve's
/// polynomial extension.
pub trait Curve {
    /// Evaluates the curve at parameter `t`, returning the 2D point.
    fn evaluate(&self, t: f64) -> Point2;

    /// Computes the raw (unnormalized) derivative vector at parameter `t`.
    fn derivative(&self, t: f64) -> Vector2;

    /// Computes the unit tangent at parameter `t`.
    ///
    /// Returns the zero vector where the derivative vanishes.
    fn tangent(&self, t: f64) -> Vector2;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Returns whether the curve is closed.
    fn is_closed(&self) -> bool;
}
