//! Headless Bevy integration tests.
//!
//! These tests verify the simulation plugin and its resources work without
//! a window or GPU.

use bevy::prelude::*;
use orbital_lander::app::{SessionSeed, SimulationPlugin};
use orbital_lander::input::KeyBindings;
use orbital_lander::session::{Session, SessionState};

fn create_minimal_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.init_resource::<ButtonInput<KeyCode>>();
    app
}

fn start_session(app: &mut App) {
    app.world_mut()
        .resource_mut::<Session>()
        .start()
        .expect("default scenario is valid");
}

#[test]
fn test_plugin_inserts_resources() {
    let mut app = create_minimal_app();
    app.add_plugins(SimulationPlugin);
    app.update();

    assert!(app.world().contains_resource::<KeyBindings>());
    let session = app.world().resource::<Session>();
    assert_eq!(session.state(), &SessionState::Uninitialized);
}

#[test]
fn test_session_waits_for_start() {
    let mut app = create_minimal_app();
    app.add_plugins(SimulationPlugin);
    for _ in 0..3 {
        app.update();
    }
    assert!(app.world().resource::<Session>().world().is_empty());

    start_session(&mut app);
    app.update();
    assert!(app.world().resource::<Session>().is_running());
}

#[test]
fn test_keyboard_cycles_time_scale() {
    let mut app = create_minimal_app();
    app.add_plugins(SimulationPlugin);
    start_session(&mut app);

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::KeyT);
    app.update();

    let session = app.world().resource::<Session>();
    assert_eq!(session.time_scale().factor(), 10.0);
}

#[test]
fn test_thrust_key_burns_fuel() {
    let mut app = create_minimal_app();
    app.add_plugins(SimulationPlugin);
    start_session(&mut app);

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::Space);
    app.update();

    let session = app.world().resource::<Session>();
    let ship = session.world().get(session.ship_id().unwrap()).unwrap();
    assert!(ship.ship().unwrap().thrusting);
}

#[test]
fn test_seed_resource_makes_layout_reproducible() {
    let layout = || {
        let mut app = create_minimal_app();
        app.insert_resource(SessionSeed(77));
        app.add_plugins(SimulationPlugin);
        start_session(&mut app);
        app.world()
            .resource::<Session>()
            .world()
            .iter()
            .map(|(_, body)| body.position)
            .collect::<Vec<_>>()
    };
    assert_eq!(layout(), layout());
}
