use crate::error::Result;
use crate::geometry::curve::{CubicBezier, Curve};
use crate::math::Point2;

use super::{Polyline, SamplingParams};

/// Samples a curve into an ordered polyline for path stroking.
pub struct SamplePath {
    params: SamplingParams,
}

impl SamplePath {
    /// Creates a new `SamplePath` operation.
    #[must_use]
    pub fn new(params: SamplingParams) -> Self {
        Self { params }
    }

    /// Executes the sampling, returning a polyline.
    ///
    /// The result is a pure function of the curve and the parameters:
    /// identical inputs reproduce identical output.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters fail validation.
    pub fn execute(&self, curve: &CubicBezier) -> Result<Polyline> {
        self.params.validate()?;
        Ok(Polyline {
            points: PathSamples::new(curve, self.params.resolution).collect(),
        })
    }
}

/// Lazy iterator over evenly spaced points along a curve.
///
/// Finite and restartable: cloning rewinds to the current state, and a fresh
/// iterator recomputes the same sequence from scratch. The final sample is
/// evaluated at exactly `t = 1`, so both endpoints are always included.
#[derive(Debug, Clone)]
pub struct PathSamples<'a> {
    curve: &'a CubicBezier,
    resolution: f64,
    steps: u32,
    index: u32,
}

impl<'a> PathSamples<'a> {
    /// Creates an iterator stepping `t` by `resolution` from 0 to 1.
    ///
    /// The step count is clamped to the range [`SamplingParams::validate`]
    /// accepts, so an unvalidated resolution degrades instead of
    /// overflowing.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(curve: &'a CubicBezier, resolution: f64) -> Self {
        // round() rather than floor(): 1/0.01 is 99.999... in binary.
        let steps = (1.0 / resolution).round().clamp(1.0, 1.0 / super::MIN_RESOLUTION) as u32;
        Self {
            curve,
            resolution,
            steps,
            index: 0,
        }
    }
}

impl Iterator for PathSamples<'_> {
    type Item = Point2;

    fn next(&mut self) -> Option<Point2> {
        if self.index > self.steps {
            return None;
        }
        let t = if self.index == self.steps {
            1.0
        } else {
            f64::from(self.index) * self.resolution
        };
        self.index += 1;
        Some(self.curve.evaluate(t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.steps + 1 - self.index) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PathSamples<'_> {}
