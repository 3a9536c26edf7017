//! Game session: the state machine around one [`World`].
//!
//! ```text
//! Uninitialized --start--> Running --ship contact--> Ended(outcome)
//!                             ^                          |
//!                             +--------- restart --------+
//! ```
//!
//! Each running tick applies the controls, advances the orbit-constrained
//! bodies, steps the physics and then looks for a body touching the ship.
//! Once ended the world is frozen until a restart rebuilds it from the
//! scenario.

use bevy::log::{debug, info, warn};
use bevy::prelude::Resource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::collision::CollisionEvent;
use crate::config::GameConfig;
use crate::input::{Control, ControlInput};
use crate::outcome::{classify, LandingOutcome, SessionOutcome};
use crate::physics::World;
use crate::scenarios::{Populated, Scenario, ScenarioError};
use crate::time::TimeScale;
use crate::types::BodyId;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error("scenario setup failed: {0}")]
    Scenario(#[from] ScenarioError),
}

/// Lifecycle of a session.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Uninitialized,
    Running,
    Ended(SessionOutcome),
}

/// Read-only values for the HUD collaborator.
#[derive(Clone, Debug, PartialEq)]
pub struct HudSnapshot {
    pub speed: f64,
    /// Lowest altitude over every non-ship body, with that body's name.
    pub min_altitude: Option<(String, f64)>,
    pub fuel_percent: f64,
    pub thrusting: bool,
    pub time_scale: TimeScale,
    /// Simulated time since the last (re)start.
    pub elapsed: f64,
}

/// One game session: world, bodies of interest and terminal state.
#[derive(Resource)]
pub struct Session {
    world: World,
    state: SessionState,
    bodies: Option<Populated>,
    time_scale: TimeScale,
    config: GameConfig,
    scenario: Scenario,
    rng: StdRng,
    elapsed: f64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(
            GameConfig::default(),
            Scenario::default(),
            rand::thread_rng().r#gen(),
        )
    }
}

impl Session {
    /// An uninitialized session. `seed` drives the random orbit phases of
    /// every (re)start.
    pub fn new(config: GameConfig, scenario: Scenario, seed: u64) -> Self {
        Self {
            world: World::new(config.physics.clone()),
            state: SessionState::Uninitialized,
            bodies: None,
            time_scale: TimeScale::default(),
            config,
            scenario,
            rng: StdRng::seed_from_u64(seed),
            elapsed: 0.0,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Direct world access, for tools and tests that stage situations.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, SessionState::Running)
    }

    pub fn outcome(&self) -> Option<&SessionOutcome> {
        match &self.state {
            SessionState::Ended(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn time_scale(&self) -> TimeScale {
        self.time_scale
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn ship_id(&self) -> Option<BodyId> {
        self.bodies.as_ref().map(|b| b.ship)
    }

    pub fn anchor_id(&self) -> Option<BodyId> {
        self.bodies.as_ref().map(|b| b.anchor)
    }

    pub fn planet_ids(&self) -> &[BodyId] {
        self.bodies.as_ref().map_or(&[], |b| b.planets.as_slice())
    }

    /// Leave `Uninitialized` by building the scenario.
    ///
    /// Does nothing once the session has started; use [`Session::restart`].
    pub fn start(&mut self) -> Result<(), SessionError> {
        if self.state != SessionState::Uninitialized {
            debug!("Session already started; ignoring start");
            return Ok(());
        }
        self.setup()?;
        info!("Session started: {}", self.scenario.name);
        Ok(())
    }

    /// Drop every body and rebuild the scenario with 1x time.
    pub fn restart(&mut self) -> Result<(), SessionError> {
        self.time_scale.reset();
        self.setup()?;
        info!("Session restarted: {}", self.scenario.name);
        Ok(())
    }

    fn setup(&mut self) -> Result<(), SessionError> {
        self.world.clear();
        self.bodies = None;
        self.elapsed = 0.0;
        match self
            .scenario
            .populate(&mut self.world, &self.config, &mut self.rng)
        {
            Ok(populated) => {
                self.bodies = Some(populated);
                self.state = SessionState::Running;
                Ok(())
            }
            Err(err) => {
                self.world.clear();
                self.state = SessionState::Uninitialized;
                Err(err.into())
            }
        }
    }

    /// One frame: scale the real delta, apply the controls, advance.
    ///
    /// The simulated step uses the time scale in effect before this tick's
    /// controls. A reset restarts the session and skips the advance.
    pub fn tick(&mut self, frame_delta: f64, input: &impl ControlInput) -> Result<(), SessionError> {
        if !frame_delta.is_finite() {
            warn!("Non-finite frame delta {frame_delta}; treating as zero");
        }
        let dt = self.time_scale.simulated_dt(frame_delta);

        match self.state {
            SessionState::Uninitialized => Ok(()),
            SessionState::Ended(_) => {
                if input.just_activated(Control::Reset) {
                    self.restart()?;
                }
                Ok(())
            }
            SessionState::Running => {
                self.apply_controls(dt, input);
                if input.just_activated(Control::Reset) {
                    return self.restart();
                }
                self.advance(dt);
                Ok(())
            }
        }
    }

    fn apply_controls(&mut self, dt: f64, input: &impl ControlInput) {
        if let Some(ship) = self.ship_id().and_then(|id| self.world.get_mut(id)) {
            // y points up, so a positive turn is counter-clockwise on screen
            if input.is_held(Control::RotateLeft) {
                ship.rotate(1.0);
            }
            if input.is_held(Control::RotateRight) {
                ship.rotate(-1.0);
            }
            if input.is_held(Control::Thrust) {
                ship.apply_thrust(dt);
            } else if let Some(state) = ship.ship_mut() {
                state.thrusting = false;
            }
        }

        if input.just_activated(Control::CycleTimeScale) {
            self.time_scale.cycle();
            info!("Time scale set to {}", self.time_scale);
        }
    }

    /// Advance a running session by `dt` of simulated time.
    ///
    /// Orbits are updated around the anchor, physics is stepped, then the
    /// first body touching the ship (if any) ends the session.
    pub fn advance(&mut self, dt: f64) {
        if !self.is_running() {
            return;
        }
        let Some(Populated { anchor, ship, .. }) = self.bodies.as_ref() else {
            return;
        };
        let (anchor, ship) = (*anchor, *ship);
        if dt <= 0.0 {
            debug!("Skipping advance with dt={dt}");
            return;
        }

        self.world.update_orbits(dt, anchor);
        self.world.step(dt);
        self.elapsed += dt;

        let Some(partner) = self.world.find_collision_partner(ship) else {
            return;
        };
        let (Some(ship_body), Some(target)) = (self.world.get(ship), self.world.get(partner)) else {
            return;
        };
        let event = CollisionEvent::capture(ship, ship_body, partner, target);
        let outcome = classify(&event, &self.config.landing);
        match outcome {
            LandingOutcome::Success => info!(
                "Landed on {} at {:.2} (altitude {:.2})",
                event.body_name, event.impact_speed, event.altitude
            ),
            LandingOutcome::Failure => info!(
                "Crashed into {} at {:.2} (altitude {:.2})",
                event.body_name, event.impact_speed, event.altitude
            ),
        }
        self.state = SessionState::Ended(SessionOutcome { outcome, event });
    }

    /// Current HUD values, or `None` before the first start.
    pub fn hud(&self) -> Option<HudSnapshot> {
        let ship_id = self.ship_id()?;
        let ship = self.world.get(ship_id)?;
        let state = ship.ship()?;

        let min_altitude = self
            .world
            .iter()
            .filter(|(id, body)| *id != ship_id && !body.is_ship())
            .map(|(_, body)| (body.name(), body.altitude_of(ship.position)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(name, altitude)| (name.to_owned(), altitude));

        Some(HudSnapshot {
            speed: ship.speed(),
            min_altitude,
            fuel_percent: state.fuel_percent(),
            thrusting: state.thrusting,
            time_scale: self.time_scale,
            elapsed: self.elapsed,
        })
    }
}
