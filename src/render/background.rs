//! Background: a fixed starfield and the optional debug grid.

use bevy::prelude::*;
use rand::Rng;

use super::RenderSettings;
use super::geometry::grid_lines;
use crate::camera::CameraRig;

const STAR_COUNT: usize = 400;
const STARFIELD_EXTENT: f32 = 3000.0;

/// Star positions and sizes, generated once at startup.
#[derive(Resource, Default)]
pub struct Starfield {
    stars: Vec<(Vec2, f32)>,
}

/// Scatter stars over the play area.
pub fn spawn_starfield(mut commands: Commands) {
    let mut rng = rand::thread_rng();
    let stars = (0..STAR_COUNT)
        .map(|_| {
            let x = rng.gen_range(-STARFIELD_EXTENT..STARFIELD_EXTENT);
            let y = rng.gen_range(-STARFIELD_EXTENT..STARFIELD_EXTENT);
            (Vec2::new(x, y), rng.gen_range(0.3..1.2))
        })
        .collect();
    commands.insert_resource(Starfield { stars });

    info!("Spawned {STAR_COUNT} background stars");
}

pub fn draw_starfield(mut gizmos: Gizmos, starfield: Option<Res<Starfield>>) {
    let Some(starfield) = starfield else {
        return;
    };
    let color = Color::srgba(1.0, 1.0, 1.0, 0.6);
    for (position, size) in &starfield.stars {
        gizmos.circle_2d(*position, *size, color);
    }
}

/// Debug grid around the camera centre.
pub fn draw_grid(mut gizmos: Gizmos, settings: Res<RenderSettings>, rig: Res<CameraRig>) {
    if !settings.show_grid {
        return;
    }
    let span = settings.grid_spacing * 20.0;
    let color = Color::srgba(0.3, 0.3, 0.3, 0.4);
    let xs = grid_lines(rig.position.x, span, settings.grid_spacing);
    let ys = grid_lines(rig.position.y, span, settings.grid_spacing);
    let (Some(&x0), Some(&x1), Some(&y0), Some(&y1)) = (xs.first(), xs.last(), ys.first(), ys.last())
    else {
        return;
    };

    for x in &xs {
        gizmos.line_2d(
            Vec2::new(*x as f32, y0 as f32),
            Vec2::new(*x as f32, y1 as f32),
            color,
        );
    }
    for y in &ys {
        gizmos.line_2d(
            Vec2::new(x0 as f32, *y as f32),
            Vec2::new(x1 as f32, *y as f32),
            color,
        );
    }
}
