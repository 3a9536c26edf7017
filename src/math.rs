//! 2D vector math for the simulation core.
//!
//! The vector type is Bevy's double-precision `DVec2`, which is a `Copy`
//! value type: every operation returns a new vector and never mutates its
//! operands. Arithmetic (`+`, `-`, `* f64`, `/ f64`), `length`,
//! `length_squared`, `dot` and `distance` come straight from it.
//!
//! Division by a scalar follows IEEE semantics (∞/NaN on zero). Callers guard
//! instead: [`crate::body::Body::apply_force`] relies on mass being strictly
//! positive, and gravity skips pairs closer than the minimum distance.

use bevy::math::DVec2;

/// Position, velocity, acceleration and force vectors (game units).
pub type Vector = DVec2;

/// Operations the simulation needs on top of `DVec2`.
pub trait VectorExt: Sized {
    /// Vector of the given length pointing along `angle` (radians, CCW from +x).
    fn from_polar(angle: f64, length: f64) -> Self;

    /// Unit vector along `self`, or the zero vector when `self` has no length.
    ///
    /// A degenerate direction has no heading, so this never fails.
    fn unit_or_zero(self) -> Self;

    /// Heading of the vector via `atan2`, in (−π, π].
    fn heading(self) -> f64;

    /// Rotate counter-clockwise by `angle` radians.
    fn rotated(self, angle: f64) -> Self;
}

impl VectorExt for DVec2 {
    #[inline]
    fn from_polar(angle: f64, length: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        DVec2::new(cos * length, sin * length)
    }

    #[inline]
    fn unit_or_zero(self) -> Self {
        let length = self.length();
        if length == 0.0 {
            DVec2::ZERO
        } else {
            self / length
        }
    }

    #[inline]
    fn heading(self) -> f64 {
        self.y.atan2(self.x)
    }

    #[inline]
    fn rotated(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        DVec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}
