use super::{MAX_FRAME_SCALE, NOMINAL_FRAME_MILLIS};

/// Converts monotonic timestamps into clamped, frame-normalized time deltas.
///
/// `dt` is a dimensionless multiple of [`NOMINAL_FRAME_MILLIS`]: 1.0 means
/// one 60 Hz frame elapsed. Deltas clamp to `[0, MAX_FRAME_SCALE]`, so a
/// long pause between ticks advances the simulation by at most two nominal
/// frames and a non-monotonic timestamp advances it by nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last: Option<f64>,
    last_delta_millis: f64,
}

impl FrameClock {
    /// Creates a clock with no recorded tick.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the clock to `now_millis` and returns the clamped `dt`.
    ///
    /// The first tick has no previous timestamp to measure against and
    /// reports exactly one nominal frame.
    pub fn tick(&mut self, now_millis: f64) -> f64 {
        let dt = match self.last {
            None => {
                self.last_delta_millis = NOMINAL_FRAME_MILLIS;
                1.0
            }
            Some(last) => {
                let elapsed = (now_millis - last).max(0.0);
                self.last_delta_millis = elapsed;
                (elapsed / NOMINAL_FRAME_MILLIS).clamp(0.0, MAX_FRAME_SCALE)
            }
        };
        self.last = Some(now_millis);
        dt
    }

    /// Returns the raw (unclamped) milliseconds measured by the last tick.
    ///
    /// Hosts derive FPS readouts from this.
    #[must_use]
    pub fn last_delta_millis(&self) -> f64 {
        self.last_delta_millis
    }
}
