use crate::error::Result;
use crate::geometry::curve::{CubicBezier, Curve};

use super::{SamplingParams, TangentSample};

/// Samples a curve into evenly spaced point/unit-tangent pairs for overlay
/// drawing.
pub struct SampleTangents {
    params: SamplingParams,
}

impl SampleTangents {
    /// Creates a new `SampleTangents` operation.
    #[must_use]
    pub fn new(params: SamplingParams) -> Self {
        Self { params }
    }

    /// Executes the sampling at `t = i / tangent_count` for
    /// `i = 0..=tangent_count`, returning `tangent_count + 1` samples.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters fail validation.
    pub fn execute(&self, curve: &CubicBezier) -> Result<Vec<TangentSample>> {
        self.params.validate()?;
        let count = self.params.tangent_count;
        let mut samples = Vec::with_capacity(count as usize + 1);
        for i in 0..=count {
            let t = f64::from(i) / f64::from(count);
            samples.push(TangentSample {
                point: curve.evaluate(t),
                tangent: curve.tangent(t),
            });
        }
        Ok(samples)
    }
}
