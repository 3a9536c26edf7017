//! Circular-orbit constraint for secondary bodies.
//!
//! A body with a positive orbit radius is placed on a circle around its
//! parent every tick instead of being integrated under gravity.

use crate::config::OrbitVelocityModel;
use crate::math::{Vector, VectorExt};

/// Circular orbit parameters of an orbit-constrained body.
#[derive(Clone, Debug, PartialEq)]
pub struct Orbit {
    /// Distance from the parent. Zero means the body moves freely.
    pub radius: f64,
    /// Angular speed in radians per unit of simulated time.
    pub angular_speed: f64,
    /// Current phase in radians. Never normalized; trig handles wraparound.
    pub angle: f64,
}

impl Orbit {
    pub fn new(radius: f64, angular_speed: f64, angle: f64) -> Self {
        Self {
            radius,
            angular_speed,
            angle,
        }
    }

    /// A free body carrying orbit data but not constrained by it.
    pub fn free() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Whether the orbit constraint drives this body.
    #[inline]
    pub fn is_constrained(&self) -> bool {
        self.radius > 0.0
    }

    /// Position on the circle for the current phase.
    #[inline]
    pub fn position_around(&self, center: Vector) -> Vector {
        center + Vector::from_polar(self.angle, self.radius)
    }

    /// Unit tangent (counter-clockwise) for the current phase.
    #[inline]
    pub fn tangent(&self) -> Vector {
        let (sin, cos) = self.angle.sin_cos();
        Vector::new(-sin, cos)
    }

    /// Speed reported along the tangent after a step of `dt`.
    ///
    /// Returns `None` when the per-step model would divide by a
    /// non-positive step.
    pub fn reported_speed(&self, dt: f64, model: OrbitVelocityModel) -> Option<f64> {
        let linear = self.angular_speed * self.radius;
        match model {
            OrbitVelocityModel::Tangential => Some(linear),
            OrbitVelocityModel::PerStep if dt > 0.0 => Some(linear / dt),
            OrbitVelocityModel::PerStep => None,
        }
    }

    /// Advance the phase by `angular_speed · dt`.
    #[inline]
    pub fn advance(&mut self, dt: f64) {
        self.angle += self.angular_speed * dt;
    }
}
