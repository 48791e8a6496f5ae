mod sample_path;
mod sample_tangents;

pub use sample_path::{PathSamples, SamplePath};
pub use sample_tangents::SampleTangents;

use crate::error::{Result, SamplingError};
use crate::math::{Point2, Vector2};

/// Smallest accepted path resolution (at most one million steps per curve).
pub const MIN_RESOLUTION: f64 = 1e-6;

/// Parameters controlling sampling density.
#[derive(Debug, Clone, Copy)]
pub struct SamplingParams {
    /// Parameter increment between consecutive path samples.
    ///
    /// Interpreted as the reciprocal of the step count, rounded to the
    /// nearest integer: 0.01 yields 100 steps and therefore 101 samples,
    /// endpoints included.
    pub resolution: f64,
    /// Number of tangent-overlay intervals (`tangent_count + 1` samples).
    pub tangent_count: u32,
    /// Pixel length of a rendered tangent segment.
    pub tangent_length: f64,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            resolution: 0.01,
            tangent_count: 15,
            tangent_length: 30.0,
        }
    }
}

impl SamplingParams {
    /// Checks the parameters for use by the sampling operations.
    ///
    /// # Errors
    ///
    /// Returns an error if the resolution is outside
    /// `[MIN_RESOLUTION, 1]` or not finite, the tangent count is zero, or
    /// the tangent length is negative or not finite.
    pub fn validate(&self) -> Result<()> {
        if !self.resolution.is_finite()
            || self.resolution < MIN_RESOLUTION
            || self.resolution > 1.0
        {
            return Err(SamplingError::InvalidParameters(format!(
                "resolution {} must be a finite value in [{MIN_RESOLUTION}, 1]",
                self.resolution
            ))
            .into());
        }
        if self.tangent_count == 0 {
            return Err(SamplingError::InvalidParameters(
                "tangent count must be at least 1".into(),
            )
            .into());
        }
        if !self.tangent_length.is_finite() || self.tangent_length < 0.0 {
            return Err(SamplingError::InvalidParameters(format!(
                "tangent length {} must be finite and non-negative",
                self.tangent_length
            ))
            .into());
        }
        Ok(())
    }
}

/// A sampled polyline approximation of a curve.
#[derive(Debug, Clone, Default)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point2>,
}

/// A curve point paired with the unit tangent direction at that point.
///
/// Produced transiently each frame; nothing retains samples across frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentSample {
    /// Position on the curve.
    pub point: Point2,
    /// Unit tangent, or the zero vector where the derivative vanishes.
    pub tangent: Vector2,
}

impl TangentSample {
    /// Returns the endpoints of a segment of the given pixel `length`
    /// centered on the sample point, aligned with the tangent.
    #[must_use]
    pub fn segment(&self, length: f64) -> (Point2, Point2) {
        let half = self.tangent * (length / 2.0);
        (self.point - half, self.point + half)
    }
}
