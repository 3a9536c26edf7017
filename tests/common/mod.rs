//! Common test utilities for integration tests.

#![allow(dead_code)]

use orbital_lander::body::{Body, BodyConfig};
use orbital_lander::config::GameConfig;
use orbital_lander::math::Vector;
use orbital_lander::physics::World;
use orbital_lander::scenarios::{PlanetSpec, Scenario, SpawnSpec};
use orbital_lander::session::Session;
use orbital_lander::types::{BodyId, Rgb};

/// Gravitational constant used by the default physics config.
pub const G: f64 = 100.0;

/// A near-massless anchor with one stationary, near-massless planet
/// ("Pad", radius 20) at (300, 0).
pub fn landing_pad_scenario() -> Scenario {
    Scenario {
        name: "Landing Pad",
        description: "Stationary target for staged approaches.",
        anchor: BodyConfig::named("Anchor").mass(1e-6).radius(1.0),
        planets: vec![
            PlanetSpec::new(BodyConfig::named("Pad").mass(1e-3).radius(20.0), 300.0, 0.0)
                .with_phase(0.0),
        ],
        ship_spawn: SpawnSpec {
            reference: "Pad".to_owned(),
            clearance: 20.0,
            orientation: 0.0,
        },
        ship_color: Rgb::WHITE,
        thrust_color: Rgb::WHITE,
    }
}

/// A started session on the landing pad.
pub fn pad_session(seed: u64) -> Session {
    let mut session = Session::new(GameConfig::default(), landing_pad_scenario(), seed);
    session.start().expect("landing pad scenario is valid");
    session
}

/// Put the ship `offset` away from the pad centre, moving with `velocity`.
pub fn stage_ship(session: &mut Session, offset: Vector, velocity: Vector) {
    let pad = session.planet_ids()[0];
    let ship = session.ship_id().expect("session started");
    let pad_position = session.world().get(pad).expect("pad exists").position;
    let body = session.world_mut().get_mut(ship).expect("ship exists");
    body.position = pad_position + offset;
    body.velocity = velocity;
}

/// A fixed anchor of mass `mass` at the origin plus a free satellite on a
/// circular orbit of radius `r`.
pub fn anchor_and_satellite(mass: f64, r: f64) -> (World, BodyId, BodyId) {
    let mut world = World::default();
    let anchor = world.add_body(
        Body::new(BodyConfig::named("Anchor").mass(mass).radius(1.0).fixed(true))
            .expect("valid anchor"),
    );
    let v = (G * mass / r).sqrt();
    let satellite = world.add_body(
        Body::new(
            BodyConfig::named("Satellite")
                .mass(1e-6)
                .radius(1.0)
                .position(Vector::new(r, 0.0))
                .velocity(Vector::new(0.0, v)),
        )
        .expect("valid satellite"),
    );
    (world, anchor, satellite)
}

/// Specific orbital energy of a test particle around a mass at the origin.
pub fn orbital_energy(mass: f64, pos: Vector, vel: Vector) -> f64 {
    0.5 * vel.length_squared() - G * mass / pos.length()
}

/// Period of a circular orbit of radius `r`.
pub fn orbital_period(mass: f64, r: f64) -> f64 {
    std::f64::consts::TAU * (r.powi(3) / (G * mass)).sqrt()
}
