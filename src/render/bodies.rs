//! Bodies, trails, orbit circles and the ship.

use bevy::prelude::*;

use super::geometry::{
    atmosphere_radius, fade_rings, ship_hull, thrust_flame, to_vec2, velocity_tip,
};
use super::{RenderSettings, color};
use crate::camera::CameraRig;
use crate::session::Session;

const GLOW_RINGS: usize = 8;
const ATMOSPHERE_RINGS: usize = 6;
const HULL_OUTLINE: Color = Color::srgb(0.0, 1.0, 1.0);
const VELOCITY_ARROW: Color = Color::srgb(0.0, 1.0, 0.0);

/// Faint circles along each constrained orbit, centred on the anchor.
pub fn draw_orbits(mut gizmos: Gizmos, session: Res<Session>, settings: Res<RenderSettings>) {
    if !settings.show_orbits {
        return;
    }
    let world = session.world();
    let Some(center) = session
        .anchor_id()
        .and_then(|id| world.get(id))
        .map(|anchor| to_vec2(anchor.position))
    else {
        return;
    };

    for (_, body) in world.iter() {
        let Some(orbit) = body.orbit().filter(|orbit| orbit.is_constrained()) else {
            continue;
        };
        gizmos.circle_2d(center, orbit.radius as f32, color(body.appearance.color, 0.12));
    }
}

pub fn draw_trails(mut gizmos: Gizmos, session: Res<Session>, settings: Res<RenderSettings>) {
    if !settings.show_trails {
        return;
    }
    for (_, body) in session.world().iter() {
        if body.trail().len() < 2 {
            continue;
        }
        let alpha = if body.is_ship() { 0.38 } else { 0.25 };
        gizmos.linestrip_2d(
            body.trail().iter().map(to_vec2),
            color(body.appearance.color, alpha),
        );
    }
}

/// Every non-ship body with its glow and atmosphere halos.
pub fn draw_bodies(mut gizmos: Gizmos, session: Res<Session>) {
    for (_, body) in session.world().iter().filter(|(_, body)| !body.is_ship()) {
        let center = to_vec2(body.position);
        let radius = body.radius();
        let appearance = &body.appearance;

        if appearance.atmosphere_height > 0.0 {
            let outer = atmosphere_radius(radius, appearance.atmosphere_height);
            for (ring, alpha) in fade_rings(radius, outer, 0.25, ATMOSPHERE_RINGS) {
                gizmos.circle_2d(center, ring, color(appearance.color, alpha));
            }
        }

        // concentric circles stand in for a filled disc
        for step in 1..=4 {
            let r = radius as f32 * step as f32 / 4.0;
            gizmos.circle_2d(center, r, color(appearance.color, 1.0));
        }

        if let Some(glow) = appearance.glow {
            for (ring, alpha) in fade_rings(radius * 0.5, radius * 2.0, 0.5, GLOW_RINGS) {
                gizmos.circle_2d(center, ring, color(glow, alpha));
            }
        }
    }
}

/// Ship hull, thrust flame and (when zoomed in) velocity arrow.
pub fn draw_ship(
    mut gizmos: Gizmos,
    session: Res<Session>,
    rig: Res<CameraRig>,
    settings: Res<RenderSettings>,
) {
    let Some(body) = session.ship_id().and_then(|id| session.world().get(id)) else {
        return;
    };
    let Some(ship) = body.ship() else {
        return;
    };

    if ship.thrusting {
        let flame = thrust_flame(body.position, ship.orientation, body.radius());
        gizmos.linestrip_2d(flame, color(session.scenario().thrust_color, 1.0));
    }

    let hull = ship_hull(body.position, ship.orientation, body.radius());
    gizmos.linestrip_2d(hull, color(body.appearance.color, 1.0));
    gizmos.linestrip_2d(
        ship_hull(body.position, ship.orientation, body.radius() * 1.1),
        HULL_OUTLINE,
    );

    if rig.zoom() > settings.velocity_arrow_min_zoom {
        gizmos.line_2d(
            to_vec2(body.position),
            velocity_tip(body.position, body.velocity),
            VELOCITY_ARROW,
        );
    }
}
