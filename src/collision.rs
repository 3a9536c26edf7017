//! Collision records produced by the physics engine and the session.
//!
//! Collisions are plain interpenetration tests on the current positions.
//! There is no swept test, so a body moving farther than the combined
//! radii within one step can pass through a target unnoticed.

use crate::body::Body;
use crate::math::{Vector, VectorExt};
use crate::types::BodyId;

/// An unordered pair of interpenetrating bodies (`a` precedes `b` in
/// iteration order).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Contact {
    pub a: BodyId,
    pub b: BodyId,
}

impl Contact {
    pub fn new(a: BodyId, b: BodyId) -> Self {
        Self { a, b }
    }
}

/// Snapshot of the ship touching another body, taken the tick it happens.
#[derive(Clone, Debug, PartialEq)]
pub struct CollisionEvent {
    pub ship: BodyId,
    /// The body that was hit.
    pub body: BodyId,
    pub body_name: String,
    /// Ship speed at contact.
    pub impact_speed: f64,
    /// Ship centre distance above the hit body's surface.
    pub altitude: f64,
    /// Angle between the ship's nose and the outward surface normal, in
    /// [0, π]. Reported for display; the landing decision ignores it.
    pub approach_angle: f64,
    pub impact_position: Vector,
}

impl CollisionEvent {
    /// Capture the contact between `ship` and `target`.
    pub fn capture(ship_id: BodyId, ship: &Body, target_id: BodyId, target: &Body) -> Self {
        let normal = (ship.position - target.position).unit_or_zero();
        let approach_angle = ship
            .ship()
            .map(|state| angle_between(state.heading(), normal))
            .unwrap_or(0.0);

        Self {
            ship: ship_id,
            body: target_id,
            body_name: target.name().to_owned(),
            impact_speed: ship.speed(),
            altitude: target.altitude_of(ship.position),
            approach_angle,
            impact_position: ship.position,
        }
    }
}

/// Unsigned angle between two directions, zero if either is degenerate.
fn angle_between(a: Vector, b: Vector) -> f64 {
    if a == Vector::ZERO || b == Vector::ZERO {
        return 0.0;
    }
    let cross = a.x * b.y - a.y * b.x;
    cross.atan2(a.dot(b)).abs()
}
