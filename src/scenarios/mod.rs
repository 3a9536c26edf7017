//! Session setup data: the anchor, its orbiting bodies and the ship spawn.
//!
//! A [`Scenario`] is pure data. [`Scenario::populate`] turns it into bodies
//! inside a [`World`], drawing any unspecified orbit phases from the
//! caller's RNG so a seeded session is reproducible.

pub mod presets;

use std::f64::consts::TAU;

use bevy::log::{debug, info};
use rand::Rng;

use crate::body::{Body, BodyConfig, BodyError, Orbit};
use crate::config::GameConfig;
use crate::math::{Vector, VectorExt};
use crate::physics::World;
use crate::types::{BodyId, Rgb};

pub use presets::inner_system;

/// Step used for the initial orbit placement so that the reported orbit
/// velocity starts out as `ω·r`.
const INITIAL_PLACEMENT_DT: f64 = 1.0;

/// Errors raised while building a scenario into a world.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ScenarioError {
    #[error("invalid body '{name}': {source}")]
    Body {
        name: String,
        #[source]
        source: BodyError,
    },

    #[error("ship spawn references unknown body '{0}'")]
    MissingReference(String),

    #[error("invalid orbit radius {radius} for '{name}'")]
    InvalidOrbit { name: String, radius: f64 },
}

/// A body that circles the anchor.
#[derive(Clone, Debug)]
pub struct PlanetSpec {
    pub body: BodyConfig,
    /// Zero leaves the body free under gravity.
    pub orbit_radius: f64,
    /// Radians per unit of simulated time.
    pub angular_speed: f64,
    /// Initial orbit angle. `None` draws one uniformly from [0, 2π).
    pub phase: Option<f64>,
}

impl PlanetSpec {
    pub fn new(body: BodyConfig, orbit_radius: f64, angular_speed: f64) -> Self {
        Self {
            body,
            orbit_radius,
            angular_speed,
            phase: None,
        }
    }

    pub fn with_phase(mut self, phase: f64) -> Self {
        self.phase = Some(phase);
        self
    }

    fn name(&self) -> &str {
        self.body.name.as_deref().unwrap_or(crate::body::DEFAULT_NAME)
    }
}

/// Where the ship starts: next to a named reference body, co-moving with it.
#[derive(Clone, Debug)]
pub struct SpawnSpec {
    /// Name of the planet the ship starts beside.
    pub reference: String,
    /// Gap between the reference surface and the ship hull.
    pub clearance: f64,
    /// Initial ship orientation in radians.
    pub orientation: f64,
}

/// A complete session setup.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub name: &'static str,
    pub description: &'static str,
    /// Always created fixed, whatever its config says.
    pub anchor: BodyConfig,
    pub planets: Vec<PlanetSpec>,
    pub ship_spawn: SpawnSpec,
    /// Drawn by the renderer for the ship body.
    pub ship_color: Rgb,
    pub thrust_color: Rgb,
}

impl Default for Scenario {
    fn default() -> Self {
        inner_system()
    }
}

/// Handles of the bodies created by [`Scenario::populate`].
#[derive(Clone, Debug, PartialEq)]
pub struct Populated {
    pub anchor: BodyId,
    pub planets: Vec<BodyId>,
    pub ship: BodyId,
}

impl Scenario {
    /// Create the anchor, the planets (placed with one orbit update) and the
    /// ship inside `world`.
    ///
    /// On error the world may hold a partial setup; callers clear it before
    /// retrying.
    pub fn populate(
        &self,
        world: &mut World,
        config: &GameConfig,
        rng: &mut impl Rng,
    ) -> Result<Populated, ScenarioError> {
        let anchor_config = with_default_trail(self.anchor.clone(), config).fixed(true);
        let anchor_name = anchor_config
            .name
            .clone()
            .unwrap_or_else(|| crate::body::DEFAULT_NAME.to_owned());
        let anchor = Body::new(anchor_config).map_err(|source| ScenarioError::Body {
            name: anchor_name,
            source,
        })?;
        let anchor = world.add_body(anchor);

        let mut planets = Vec::with_capacity(self.planets.len());
        let mut reference = None;
        for spec in &self.planets {
            if !spec.orbit_radius.is_finite() || spec.orbit_radius < 0.0 {
                return Err(ScenarioError::InvalidOrbit {
                    name: spec.name().to_owned(),
                    radius: spec.orbit_radius,
                });
            }
            let phase = spec.phase.unwrap_or_else(|| rng.gen_range(0.0..TAU));
            let orbit = Orbit::new(spec.orbit_radius, spec.angular_speed, phase);
            let body = Body::orbiting(with_default_trail(spec.body.clone(), config), orbit)
                .map_err(|source| ScenarioError::Body {
                    name: spec.name().to_owned(),
                    source,
                })?;
            debug!("Placing {} at phase {phase:.3} rad", body.name());
            let id = world.add_body(body);
            if spec.name() == self.ship_spawn.reference {
                reference = Some(id);
            }
            planets.push(id);
        }
        world.update_orbits(INITIAL_PLACEMENT_DT, anchor);

        let reference = reference
            .ok_or_else(|| ScenarioError::MissingReference(self.ship_spawn.reference.clone()))?;
        let (position, velocity) = self.spawn_point(world, anchor, reference, config);
        let ship = Body::ship(
            BodyConfig::named("Ship")
                .position(position)
                .velocity(velocity)
                .trail_length(config.trail_length)
                .color(self.ship_color),
            &config.ship,
            self.ship_spawn.orientation,
        )
        .map_err(|source| ScenarioError::Body {
            name: "Ship".to_owned(),
            source,
        })?;
        let ship = world.add_body(ship);

        info!(
            "Scenario '{}' populated: {} planets, ship beside {}",
            self.name,
            planets.len(),
            self.ship_spawn.reference
        );
        Ok(Populated {
            anchor,
            planets,
            ship,
        })
    }

    /// Ship start state: radially outside the reference body, clear of its
    /// surface, moving with it.
    pub fn spawn_point(
        &self,
        world: &World,
        anchor: BodyId,
        reference: BodyId,
        config: &GameConfig,
    ) -> (Vector, Vector) {
        let Some(body) = world.get(reference) else {
            return (Vector::ZERO, Vector::ZERO);
        };
        let center = world.get(anchor).map_or(Vector::ZERO, |a| a.position);
        // Starting at the reference centre would register as a contact on
        // the first tick and end the session before any input.
        let mut outward = (body.position - center).unit_or_zero();
        if outward == Vector::ZERO {
            outward = Vector::X;
        }
        let offset = body.radius() + config.ship.radius + self.ship_spawn.clearance;
        (body.position + outward * offset, body.velocity)
    }
}

fn with_default_trail(mut body: BodyConfig, config: &GameConfig) -> BodyConfig {
    if body.max_trail_length.is_none() {
        body.max_trail_length = Some(config.trail_length);
    }
    body
}
