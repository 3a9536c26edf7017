//! Bevy tick driver: owns the [`Session`] resource and advances it once
//! per frame from keyboard input.

use bevy::prelude::*;
use rand::Rng;

use crate::config::GameConfig;
use crate::input::{KeyBindings, KeyboardControls};
use crate::scenarios::Scenario;
use crate::session::Session;

/// Ordering label for the per-frame session tick. Presentation systems run
/// after it so they see the state of the current frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimulationSet;

/// Seed for the session's orbit-phase RNG. Random unless inserted first.
#[derive(Resource, Clone, Copy, Debug)]
pub struct SessionSeed(pub u64);

/// Plugin providing the simulation session and its tick.
///
/// Uses a pre-inserted [`GameConfig`] or [`SessionSeed`] when present; a
/// pre-inserted [`Session`] is kept as is.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<KeyBindings>()
            .init_resource::<GameConfig>();

        if !app.world().contains_resource::<Session>() {
            let config = app.world().resource::<GameConfig>().clone();
            let seed = app
                .world()
                .get_resource::<SessionSeed>()
                .map_or_else(|| rand::thread_rng().r#gen(), |seed| seed.0);
            info!("Session seed {seed}");
            app.insert_resource(Session::new(config, Scenario::default(), seed));
        }

        app.add_systems(Update, tick_session.in_set(SimulationSet));
    }
}

/// Advance the session by the real frame delta.
pub fn tick_session(
    time: Res<Time>,
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut session: ResMut<Session>,
) {
    let controls = KeyboardControls::new(&keys, &bindings);
    if let Err(err) = session.tick(time.delta_secs_f64(), &controls) {
        error!("Session tick failed: {err}");
    }
}
