//! Physical bodies: anchor, orbiting planets and the player ship.
//!
//! Every body shares one kinematic core (mass, radius, position, velocity,
//! force accumulator, trail). Kind-specific behaviour is carried by
//! [`BodyKind`] and applied around the shared integration step:
//! - `Plain`: free body, or the fixed anchor when `fixed` is set
//! - `Orbiting`: position and velocity come from the orbit constraint
//! - `Ship`: thrust and fuel, mass recomputed after every integration

mod orbit;
mod ship;
mod trail;

use std::num::NonZeroUsize;

use bevy::log::warn;

pub use orbit::Orbit;
pub use ship::ShipState;
pub use trail::Trail;

use crate::config::{OrbitVelocityModel, ShipSpec};
use crate::math::Vector;
use crate::physics::semi_implicit_euler;
use crate::types::Rgb;

/// Defaults substituted for missing optional body fields.
pub const DEFAULT_NAME: &str = "Unknown";
pub const DEFAULT_MASS: f64 = 1.0;
pub const DEFAULT_RADIUS: f64 = 10.0;
pub const DEFAULT_TRAIL_LENGTH: usize = 100;

/// Errors raised when constructing a body with invalid physical values.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum BodyError {
    #[error("body mass must be positive (got {0})")]
    NonPositiveMass(f64),

    #[error("body radius must not be negative (got {0})")]
    NegativeRadius(f64),

    #[error("trail capacity must be at least 1")]
    ZeroTrailCapacity,

    #[error("{0} must be finite")]
    NonFinite(&'static str),

    #[error("ship {0} must not be negative (got {1})")]
    NegativeShipParameter(&'static str, f64),
}

/// Cosmetic attributes; none of these affect physics.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Appearance {
    pub color: Rgb,
    /// Halo drawn around the anchor.
    pub glow: Option<Rgb>,
    /// Atmosphere thickness drawn around planets (display km).
    pub atmosphere_height: f64,
}

/// Construction parameters for a body. Unset fields fall back to defaults.
#[derive(Clone, Debug, Default)]
pub struct BodyConfig {
    pub name: Option<String>,
    pub mass: Option<f64>,
    pub radius: Option<f64>,
    pub position: Option<Vector>,
    pub velocity: Option<Vector>,
    pub fixed: bool,
    pub max_trail_length: Option<usize>,
    pub appearance: Appearance,
}

impl BodyConfig {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn mass(mut self, mass: f64) -> Self {
        self.mass = Some(mass);
        self
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn position(mut self, position: Vector) -> Self {
        self.position = Some(position);
        self
    }

    pub fn velocity(mut self, velocity: Vector) -> Self {
        self.velocity = Some(velocity);
        self
    }

    pub fn fixed(mut self, fixed: bool) -> Self {
        self.fixed = fixed;
        self
    }

    pub fn trail_length(mut self, length: usize) -> Self {
        self.max_trail_length = Some(length);
        self
    }

    pub fn color(mut self, color: Rgb) -> Self {
        self.appearance.color = color;
        self
    }

    pub fn glow(mut self, glow: Rgb) -> Self {
        self.appearance.glow = Some(glow);
        self
    }

    pub fn atmosphere(mut self, height: f64) -> Self {
        self.appearance.atmosphere_height = height;
        self
    }
}

/// Kind-specific data.
#[derive(Clone, Debug, PartialEq)]
pub enum BodyKind {
    Plain,
    Orbiting(Orbit),
    Ship(ShipState),
}

fn validate_ship_spec(spec: &ShipSpec) -> Result<(), BodyError> {
    let fields = [
        ("dry mass", spec.dry_mass),
        ("fuel capacity", spec.fuel_capacity),
        ("max thrust", spec.max_thrust),
        ("fuel consumption rate", spec.fuel_consumption_rate),
        ("rotation step", spec.rotation_step),
    ];
    if let Some((name, _)) = fields.iter().find(|(_, value)| !value.is_finite()) {
        return Err(BodyError::NonFinite(*name));
    }
    if spec.dry_mass <= 0.0 {
        return Err(BodyError::NonPositiveMass(spec.dry_mass));
    }
    if spec.fuel_capacity < 0.0 {
        return Err(BodyError::NegativeShipParameter("fuel capacity", spec.fuel_capacity));
    }
    if spec.fuel_consumption_rate < 0.0 {
        return Err(BodyError::NegativeShipParameter(
            "fuel consumption rate",
            spec.fuel_consumption_rate,
        ));
    }
    Ok(())
}

/// A simulated body.
#[derive(Clone, Debug)]
pub struct Body {
    name: String,
    mass: f64,
    radius: f64,
    pub position: Vector,
    pub velocity: Vector,
    acceleration: Vector,
    fixed: bool,
    trail: Trail,
    pub appearance: Appearance,
    kind: BodyKind,
}

impl Body {
    /// Build a plain body from `config`.
    pub fn new(config: BodyConfig) -> Result<Self, BodyError> {
        Self::with_kind(config, BodyKind::Plain)
    }

    /// Build an orbit-constrained body.
    pub fn orbiting(config: BodyConfig, orbit: Orbit) -> Result<Self, BodyError> {
        if !orbit.radius.is_finite() || !orbit.angular_speed.is_finite() || !orbit.angle.is_finite()
        {
            return Err(BodyError::NonFinite("orbit"));
        }
        Self::with_kind(config, BodyKind::Orbiting(orbit))
    }

    /// Build a fully fuelled ship. Mass and radius come from `spec`.
    ///
    /// The dry mass must be positive so the ship keeps a positive mass once
    /// the tank runs dry.
    pub fn ship(config: BodyConfig, spec: &ShipSpec, orientation: f64) -> Result<Self, BodyError> {
        validate_ship_spec(spec)?;
        let state = ShipState::new(spec, orientation);
        let config = BodyConfig {
            mass: Some(state.effective_mass()),
            radius: Some(spec.radius),
            ..config
        };
        Self::with_kind(config, BodyKind::Ship(state))
    }

    fn with_kind(config: BodyConfig, kind: BodyKind) -> Result<Self, BodyError> {
        let mass = config.mass.unwrap_or(DEFAULT_MASS);
        if mass.is_nan() || mass <= 0.0 {
            return Err(BodyError::NonPositiveMass(mass));
        }
        if !mass.is_finite() {
            return Err(BodyError::NonFinite("mass"));
        }

        let radius = config.radius.unwrap_or(DEFAULT_RADIUS);
        if radius.is_nan() || radius < 0.0 {
            return Err(BodyError::NegativeRadius(radius));
        }
        if !radius.is_finite() {
            return Err(BodyError::NonFinite("radius"));
        }

        let position = config.position.unwrap_or(Vector::ZERO);
        if !position.is_finite() {
            return Err(BodyError::NonFinite("position"));
        }
        let velocity = config.velocity.unwrap_or(Vector::ZERO);
        if !velocity.is_finite() {
            return Err(BodyError::NonFinite("velocity"));
        }

        let capacity = NonZeroUsize::new(config.max_trail_length.unwrap_or(DEFAULT_TRAIL_LENGTH))
            .ok_or(BodyError::ZeroTrailCapacity)?;

        Ok(Self {
            name: config.name.unwrap_or_else(|| DEFAULT_NAME.to_owned()),
            mass,
            radius,
            position,
            velocity,
            acceleration: Vector::ZERO,
            fixed: config.fixed,
            trail: Trail::new(capacity),
            appearance: config.appearance,
            kind,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Accumulated acceleration since the last integration.
    pub fn acceleration(&self) -> Vector {
        self.acceleration
    }

    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn kind(&self) -> &BodyKind {
        &self.kind
    }

    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }

    pub fn orbit(&self) -> Option<&Orbit> {
        match &self.kind {
            BodyKind::Orbiting(orbit) => Some(orbit),
            _ => None,
        }
    }

    pub fn ship(&self) -> Option<&ShipState> {
        match &self.kind {
            BodyKind::Ship(ship) => Some(ship),
            _ => None,
        }
    }

    pub fn ship_mut(&mut self) -> Option<&mut ShipState> {
        match &mut self.kind {
            BodyKind::Ship(ship) => Some(ship),
            _ => None,
        }
    }

    pub fn is_ship(&self) -> bool {
        matches!(self.kind, BodyKind::Ship(_))
    }

    /// Whether the orbit constraint, not gravity, positions this body.
    pub fn is_orbit_constrained(&self) -> bool {
        self.orbit().is_some_and(Orbit::is_constrained)
    }

    /// Accumulate `force / mass` into the acceleration. No-op when fixed.
    pub fn apply_force(&mut self, force: Vector) {
        if self.fixed {
            return;
        }
        self.acceleration += force / self.mass;
    }

    /// Advance by `dt` with semi-implicit Euler and drain the accumulator.
    ///
    /// Fixed bodies are untouched. Orbit-constrained bodies only record
    /// their trail and drop the accumulated force, since the orbit update
    /// owns their position. Ships recompute their mass afterwards.
    pub fn integrate(&mut self, dt: f64) {
        if self.fixed {
            return;
        }

        self.trail.push(self.position);
        if !self.is_orbit_constrained() {
            let (position, velocity) =
                semi_implicit_euler(self.position, self.velocity, self.acceleration, dt);
            self.position = position;
            self.velocity = velocity;
        }
        self.acceleration = Vector::ZERO;

        if let BodyKind::Ship(ship) = &self.kind {
            self.mass = ship.effective_mass();
        }
    }

    /// Reposition an orbit-constrained body around `center`.
    ///
    /// Free bodies (orbit radius zero) are left to gravity.
    pub fn update_orbit(&mut self, dt: f64, center: Vector, model: OrbitVelocityModel) {
        let BodyKind::Orbiting(orbit) = &mut self.kind else {
            return;
        };
        if !orbit.is_constrained() {
            return;
        }

        orbit.advance(dt);
        self.position = orbit.position_around(center);
        match orbit.reported_speed(dt, model) {
            Some(speed) => self.velocity = orbit.tangent() * speed,
            None => warn!(
                "Orbit update for {} with non-positive dt {}; keeping previous velocity",
                self.name, dt
            ),
        }
    }

    /// Fire the engine for `dt`. Does nothing for non-ship bodies.
    ///
    /// Returns whether any thrust was produced.
    pub fn apply_thrust(&mut self, dt: f64) -> bool {
        let BodyKind::Ship(ship) = &mut self.kind else {
            return false;
        };
        match ship.burn(dt) {
            Some(force) => {
                self.apply_force(force);
                true
            }
            None => false,
        }
    }

    /// Turn the ship one step toward the sign of `direction`.
    pub fn rotate(&mut self, direction: f64) {
        if let Some(ship) = self.ship_mut() {
            ship.rotate(direction);
        }
    }

    /// Restore a clean flight state: new kinematics, full tank, empty trail.
    pub fn reset_to(&mut self, position: Vector, velocity: Vector, orientation: f64) {
        self.position = position;
        self.velocity = velocity;
        self.acceleration = Vector::ZERO;
        self.trail.clear();
        if let BodyKind::Ship(ship) = &mut self.kind {
            ship.orientation = orientation;
            ship.refuel();
            ship.thrusting = false;
            self.mass = ship.effective_mass();
        }
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        self.position.distance(other.position)
    }

    /// Interpenetration test: centre distance strictly below the radius sum.
    pub fn is_colliding(&self, other: &Body) -> bool {
        self.distance_to(other) < self.radius + other.radius
    }

    /// Height of `point` above this body's surface.
    pub fn altitude_of(&self, point: Vector) -> f64 {
        self.position.distance(point) - self.radius
    }
}
