//! Tuning constants for the game, grouped into config resources.
//!
//! Units are game units throughout: the gravitational constant is a tuned
//! scalar, distances are world units, time is seconds of simulated time.

use std::f64::consts::PI;

use bevy::prelude::Resource;

/// How an orbit-constrained body reports its velocity after an orbit update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrbitVelocityModel {
    /// `ω·r / dt` along the tangent. Scales inversely with the step size;
    /// kept as the default because gravity interactions were tuned with it.
    #[default]
    PerStep,
    /// `ω·r` along the tangent (the physical circular-orbit speed).
    Tangential,
}

/// Physics engine configuration.
#[derive(Resource, Clone, Debug)]
pub struct PhysicsConfig {
    /// Game gravitational constant. Default: 100.
    pub gravitational_constant: f64,
    /// Pairs closer than this exert no gravity on each other. Default: 1.
    pub min_distance: f64,
    /// Velocity reported by orbit-constrained bodies.
    pub orbit_velocity: OrbitVelocityModel,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: 100.0,
            min_distance: 1.0,
            orbit_velocity: OrbitVelocityModel::PerStep,
        }
    }
}

/// Thresholds for classifying a ship contact as a landing.
#[derive(Resource, Clone, Debug)]
pub struct LandingCriteria {
    /// Maximum touchdown speed. Default: 5.
    pub max_velocity: f64,
    /// Maximum altitude above the contacted surface. Default: 10.
    pub max_altitude: f64,
    /// Maximum nose deviation from the surface normal. Default: 30°.
    ///
    /// Reported in the collision event only; the classifier does not use it.
    pub max_angle: f64,
}

impl Default for LandingCriteria {
    fn default() -> Self {
        Self {
            max_velocity: 5.0,
            max_altitude: 10.0,
            max_angle: PI / 6.0,
        }
    }
}

/// Ship hull and engine parameters.
#[derive(Clone, Debug)]
pub struct ShipSpec {
    /// Mass without fuel. Default: 1000.
    pub dry_mass: f64,
    /// Full tank. Default: 1000 (fuel counts toward mass 1:1).
    pub fuel_capacity: f64,
    /// Thrust force magnitude. Default: 50000.
    pub max_thrust: f64,
    /// Fuel burned per unit of simulated time while thrusting. Default: 0.5.
    pub fuel_consumption_rate: f64,
    /// Collision radius. Default: 5.
    pub radius: f64,
    /// Orientation change per rotate call (radians). Default: 0.05.
    pub rotation_step: f64,
}

impl Default for ShipSpec {
    fn default() -> Self {
        Self {
            dry_mass: 1000.0,
            fuel_capacity: 1000.0,
            max_thrust: 50_000.0,
            fuel_consumption_rate: 0.5,
            radius: 5.0,
            rotation_step: 0.05,
        }
    }
}

/// Camera collaborator parameters.
#[derive(Resource, Clone, Debug)]
pub struct CameraConfig {
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Zoom applied when a session starts. Default: 0.5.
    pub initial_zoom: f64,
    /// Fraction of the remaining distance to the target covered per tick.
    pub smoothing: f64,
    /// Zoom change per tick while a zoom control is held.
    pub zoom_step: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            min_zoom: 0.05,
            max_zoom: 5.0,
            initial_zoom: 0.5,
            smoothing: 0.1,
            zoom_step: 0.01,
        }
    }
}

/// Aggregate configuration for a game session.
#[derive(Resource, Clone, Debug)]
pub struct GameConfig {
    pub physics: PhysicsConfig,
    pub landing: LandingCriteria,
    pub ship: ShipSpec,
    /// Trail capacity for every body. Default: 100.
    pub trail_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            landing: LandingCriteria::default(),
            ship: ShipSpec::default(),
            trail_length: 100,
        }
    }
}
