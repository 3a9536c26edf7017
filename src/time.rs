//! Discrete time-scale (fast-forward) multiplier.
//!
//! The simulated step for a tick is the real frame delta times the active
//! multiplier, so the physics sees anything from a few milliseconds at 1x
//! to well over a hundred time units at 10000x.

use std::fmt;

/// Selectable fast-forward multipliers, cycled in order.
pub const TIME_SCALES: [f64; 5] = [1.0, 10.0, 100.0, 1000.0, 10000.0];

/// The currently selected entry of [`TIME_SCALES`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeScale {
    index: usize,
}

impl TimeScale {
    /// Multiplier applied to real elapsed time.
    pub fn factor(self) -> f64 {
        TIME_SCALES[self.index]
    }

    pub fn index(self) -> usize {
        self.index
    }

    /// Select the next multiplier, wrapping back to 1x after the last.
    pub fn cycle(&mut self) -> f64 {
        self.index = (self.index + 1) % TIME_SCALES.len();
        self.factor()
    }

    /// Back to 1x.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Simulated step for a real frame delta.
    ///
    /// Negative or non-finite deltas yield a zero step.
    pub fn simulated_dt(self, frame_delta: f64) -> f64 {
        if frame_delta.is_finite() && frame_delta > 0.0 {
            frame_delta * self.factor()
        } else {
            0.0
        }
    }
}

impl fmt::Display for TimeScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.factor())
    }
}
