//! Orbital Lander - 2D gravity landing game
//!
//! Fly a small ship through a toy solar system and set it down gently on a
//! planet.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use orbital_lander::app::SimulationPlugin;
use orbital_lander::camera::CameraPlugin;
use orbital_lander::render::RenderPlugin;
use orbital_lander::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orbital Lander".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Session first: camera and renderer read it
        .add_plugins((SimulationPlugin, CameraPlugin, RenderPlugin, UiPlugin))
        .run();
}
