//! Host-facing assembly of the whole system.
//!
//! A [`Scene`] accepts plain numbers (canvas size at construction, pointer
//! position and timestamp per frame) and returns plain geometry for a host
//! renderer to draw. It holds no drawing context and schedules nothing: the
//! host owns the animation loop and calls [`Scene::tick`] once per frame.

use crate::error::{Result, SceneError};
use crate::geometry::curve::CubicBezier;
use crate::math::{Point2, Vector2};
use crate::sampling::{Polyline, SamplePath, SampleTangents, SamplingParams, TangentSample};
use crate::simulation::{ControlPoint, FrameClock};

/// Distance of each fixed endpoint from the left/right canvas edge.
pub const ENDPOINT_MARGIN: f64 = 200.0;

/// Pointer-to-target offset for the first interior control point.
///
/// The two offsets are deliberately asymmetric so a single pointer signal
/// deforms the two halves of the curve differently.
pub const P1_TARGET_OFFSET: (f64, f64) = (-100.0, -50.0);

/// Pointer-to-target offset for the second interior control point.
pub const P2_TARGET_OFFSET: (f64, f64) = (100.0, 50.0);

/// Initial offset of the first interior control point from the start
/// endpoint.
const P1_SEED_OFFSET: (f64, f64) = (150.0, -100.0);

/// Initial offset of the second interior control point from the end
/// endpoint.
const P2_SEED_OFFSET: (f64, f64) = (-150.0, 100.0);

/// An interactive curve scene: two fixed endpoints and two spring-driven
/// interior control points chasing the pointer.
#[derive(Debug, Clone)]
pub struct Scene {
    start: Point2,
    end: Point2,
    p1: ControlPoint,
    p2: ControlPoint,
    clock: FrameClock,
    params: SamplingParams,
    frame: u64,
}

impl Scene {
    /// Creates a scene for a canvas of the given pixel dimensions.
    ///
    /// The fixed endpoints sit [`ENDPOINT_MARGIN`] pixels in from the left
    /// and right edges at mid-height and never move afterwards. The interior
    /// control points start at rest near their respective endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are not finite, the canvas is too
    /// narrow to separate the endpoints, or the sampling parameters are
    /// invalid.
    pub fn new(width: f64, height: f64, params: SamplingParams) -> Result<Self> {
        if !width.is_finite() || !height.is_finite() {
            return Err(SceneError::NonFiniteCanvas { width, height }.into());
        }
        if width <= 2.0 * ENDPOINT_MARGIN {
            return Err(SceneError::CanvasTooSmall {
                width,
                height,
                margin: ENDPOINT_MARGIN,
            }
            .into());
        }
        params.validate()?;

        let mid_y = height / 2.0;
        let start = Point2::new(ENDPOINT_MARGIN, mid_y);
        let end = Point2::new(width - ENDPOINT_MARGIN, mid_y);
        let p1 = ControlPoint::new(start + Vector2::new(P1_SEED_OFFSET.0, P1_SEED_OFFSET.1));
        let p2 = ControlPoint::new(end + Vector2::new(P2_SEED_OFFSET.0, P2_SEED_OFFSET.1));

        tracing::debug!(width, height, "scene constructed");

        Ok(Self {
            start,
            end,
            p1,
            p2,
            clock: FrameClock::new(),
            params,
            frame: 0,
        })
    }

    /// Clocks one frame: derives a clamped `dt` from the timestamp, then
    /// advances the simulation. Returns the `dt` that was applied.
    ///
    /// `now_millis` must come from a monotonic source; a backwards step
    /// freezes the frame rather than integrating negative time.
    pub fn tick(&mut self, now_millis: f64, pointer: Point2) -> f64 {
        let dt = self.clock.tick(now_millis);
        self.advance(pointer, dt);
        dt
    }

    /// One physics step at an explicit `dt`, for hosts that own their own
    /// timing.
    ///
    /// Reads the pointer once (latest value wins; no event queue), retargets
    /// both interior control points through the fixed offsets, and steps the
    /// two springs in order.
    pub fn advance(&mut self, pointer: Point2, dt: f64) {
        self.frame += 1;
        tracing::trace!(frame = self.frame, dt, "advance");
        self.p1
            .set_target(pointer + Vector2::new(P1_TARGET_OFFSET.0, P1_TARGET_OFFSET.1));
        self.p2
            .set_target(pointer + Vector2::new(P2_TARGET_OFFSET.0, P2_TARGET_OFFSET.1));
        self.p1.step(dt);
        self.p2.step(dt);
    }

    /// Returns the instantaneous curve snapshot for this frame.
    #[must_use]
    pub fn curve(&self) -> CubicBezier {
        CubicBezier::new(self.start, *self.p1.position(), *self.p2.position(), self.end)
    }

    /// Samples the current curve for path stroking.
    ///
    /// # Errors
    ///
    /// Returns an error if the sampling parameters fail validation.
    pub fn path(&self) -> Result<Polyline> {
        SamplePath::new(self.params).execute(&self.curve())
    }

    /// Samples the current curve for tangent-overlay drawing.
    ///
    /// # Errors
    ///
    /// Returns an error if the sampling parameters fail validation.
    pub fn tangents(&self) -> Result<Vec<TangentSample>> {
        SampleTangents::new(self.params).execute(&self.curve())
    }

    /// Returns the fixed endpoints `(p0, p3)`.
    #[must_use]
    pub fn endpoints(&self) -> (Point2, Point2) {
        (self.start, self.end)
    }

    /// Returns the current interior control point positions, for marker and
    /// guide-line drawing.
    #[must_use]
    pub fn control_positions(&self) -> (Point2, Point2) {
        (*self.p1.position(), *self.p2.position())
    }

    /// Returns the sampling parameters the scene was built with.
    #[must_use]
    pub fn params(&self) -> &SamplingParams {
        &self.params
    }

    /// Raw milliseconds measured by the last [`Scene::tick`], for host FPS
    /// readouts.
    #[must_use]
    pub fn last_frame_millis(&self) -> f64 {
        self.clock.last_delta_millis()
    }
}
