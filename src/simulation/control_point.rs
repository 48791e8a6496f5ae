use crate::math::{Point2, Vector2};

use super::{AUX_DAMPING_SCALE, DAMPING_FACTOR, SPRING_CONSTANT};

/// A dynamic control point settling toward a target under spring-damper
/// motion.
///
/// Damping is applied twice per step: once as a weak additive force and once
/// multiplicatively on the velocity. Both applications are required for the
/// intended settling behavior.
///
/// Position is unbounded: a point may leave the canvas and spring back, the
/// renderer clips.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    position: Point2,
    velocity: Vector2,
    target: Point2,
    spring_constant: f64,
    damping_factor: f64,
}

impl ControlPoint {
    /// Creates a control point at rest at `position`, which also seeds the
    /// target.
    #[must_use]
    pub fn new(position: Point2) -> Self {
        Self::with_tuning(position, SPRING_CONSTANT, DAMPING_FACTOR)
    }

    /// Creates a control point with explicit tuning constants.
    ///
    /// The constants are fixed for the lifetime of the instance.
    #[must_use]
    pub fn with_tuning(position: Point2, spring_constant: f64, damping_factor: f64) -> Self {
        Self {
            position,
            velocity: Vector2::zeros(),
            target: position,
            spring_constant,
            damping_factor,
        }
    }

    /// Returns the current position.
    #[must_use]
    pub fn position(&self) -> &Point2 {
        &self.position
    }

    /// Returns the current velocity.
    #[must_use]
    pub fn velocity(&self) -> &Vector2 {
        &self.velocity
    }

    /// Returns the current target.
    #[must_use]
    pub fn target(&self) -> &Point2 {
        &self.target
    }

    /// Sets the target the point settles toward.
    ///
    /// Idempotent; takes effect on the next [`ControlPoint::step`].
    pub fn set_target(&mut self, target: Point2) {
        self.target = target;
    }

    /// Advances the spring state by `dt` nominal-frame units.
    ///
    /// Velocity and position are updated together, in that order; nothing
    /// else mutates them.
    pub fn step(&mut self, dt: f64) {
        let f_spring = -(self.position - self.target) * self.spring_constant;
        let f_damp = -self.velocity * self.damping_factor * AUX_DAMPING_SCALE;
        let acceleration = f_spring + f_damp;
        self.velocity += acceleration * dt;
        self.velocity *= self.damping_factor;
        self.position += self.velocity * dt;
    }
}
