//! Rendering systems for the lander.
//!
//! Everything is drawn with Bevy gizmos in world space; the camera plugin
//! supplies the world-to-screen transform. The renderer only reads the
//! session.

mod background;
mod bodies;
pub mod geometry;

use bevy::prelude::*;

use self::background::{draw_grid, draw_starfield, spawn_starfield};
use self::bodies::{draw_bodies, draw_orbits, draw_ship, draw_trails};
use crate::app::SimulationSet;
use crate::types::Rgb;

/// Toggles and tuning for the renderer.
#[derive(Resource, Clone, Debug)]
pub struct RenderSettings {
    pub show_orbits: bool,
    pub show_trails: bool,
    /// Debug grid, off by default.
    pub show_grid: bool,
    pub grid_spacing: f64,
    /// The velocity arrow is drawn only above this zoom.
    pub velocity_arrow_min_zoom: f64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            show_orbits: true,
            show_trails: true,
            show_grid: false,
            grid_spacing: 100.0,
            velocity_arrow_min_zoom: 0.5,
        }
    }
}

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RenderSettings>()
            .insert_resource(ClearColor(Color::BLACK))
            .add_systems(Startup, spawn_starfield)
            // back to front
            .add_systems(
                Update,
                (
                    draw_starfield,
                    draw_grid,
                    draw_orbits,
                    draw_trails,
                    draw_bodies,
                    draw_ship,
                )
                    .chain()
                    .after(SimulationSet),
            );
    }
}

/// Body color with alpha.
pub(crate) fn color(rgb: Rgb, alpha: f32) -> Color {
    let [r, g, b] = rgb.to_f32();
    Color::srgba(r, g, b, alpha)
}
