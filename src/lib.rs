//! Elastica - an interactive spring-driven cubic Bezier curve kernel.
//!
//! # Architecture
//!
//! Layered modules with strict inward-only dependencies:
//!
//! - **math**: nalgebra type aliases and free cubic Bezier arithmetic
//! - **geometry**: parametric curve trait and the cubic Bezier curve
//! - **simulation**: spring-damper control points and the frame clock
//! - **sampling**: path and tangent-overlay sampling operations
//! - **scene**: host-facing assembly wiring pointer input to curve state
//!
//! The crate has no drawing context of its own: a host supplies a pointer
//! position and a timestamp per frame and draws whatever the sampling
//! operations return.

pub mod error;
pub mod geometry;
pub mod math;
pub mod sampling;
pub mod scene;
pub mod simulation;

pub use error::{ElasticaError, Result};
