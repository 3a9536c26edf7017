//! Pure shape geometry for the gizmo renderer.
//!
//! Everything is in world units and `f32`, ready to hand to gizmos.

use bevy::math::Vec2;

use crate::math::{Vector, VectorExt};
use crate::types::WORLD_UNITS_PER_KM;

/// Length of the drawn velocity arrow per unit of speed.
pub const VELOCITY_ARROW_SCALE: f64 = 0.1;

#[inline]
pub fn to_vec2(v: Vector) -> Vec2 {
    v.as_vec2()
}

/// Outline of the ship hull: nose 1.5 radii ahead, tail corners one radius
/// back and to each side. Returned closed (first point repeated).
pub fn ship_hull(position: Vector, orientation: f64, radius: f64) -> [Vec2; 4] {
    let local = [
        Vector::new(radius * 1.5, 0.0),
        Vector::new(-radius, radius),
        Vector::new(-radius, -radius),
    ];
    let [nose, left, right] = local.map(|p| to_vec2(position + p.rotated(orientation)));
    [nose, left, right, nose]
}

/// Thrust flame behind the ship: a notched arrowhead three radii long.
/// Returned closed.
pub fn thrust_flame(position: Vector, orientation: f64, radius: f64) -> [Vec2; 5] {
    let length = radius * 3.0;
    let width = radius * 0.8;
    let local = [
        Vector::ZERO,
        Vector::new(length, -width / 2.0),
        Vector::new(length * 0.7, 0.0),
        Vector::new(length, width / 2.0),
    ];
    let backwards = orientation + std::f64::consts::PI;
    let [base, upper, notch, lower] = local.map(|p| to_vec2(position + p.rotated(backwards)));
    [base, upper, notch, lower, base]
}

/// Tip of the velocity arrow drawn from the ship centre.
pub fn velocity_tip(position: Vector, velocity: Vector) -> Vec2 {
    to_vec2(position + velocity * VELOCITY_ARROW_SCALE)
}

/// Outer radius of an atmosphere halo, in world units. Atmosphere heights
/// are given in display kilometres.
pub fn atmosphere_radius(radius: f64, atmosphere_height_km: f64) -> f64 {
    radius + atmosphere_height_km / WORLD_UNITS_PER_KM
}

/// Radii and alpha for concentric rings approximating a radial fade from
/// `inner` (alpha `alpha_inner`) out to `outer` (transparent).
pub fn fade_rings(inner: f64, outer: f64, alpha_inner: f32, rings: usize) -> Vec<(f32, f32)> {
    if rings == 0 || outer <= inner {
        return Vec::new();
    }
    (0..rings)
        .map(|i| {
            let t = i as f64 / rings as f64;
            let radius = inner + (outer - inner) * t;
            (radius as f32, alpha_inner * (1.0 - t as f32))
        })
        .collect()
}

/// Grid line offsets covering `span` world units around `center`, snapped
/// to multiples of `spacing`.
pub fn grid_lines(center: f64, span: f64, spacing: f64) -> Vec<f64> {
    if spacing <= 0.0 || !span.is_finite() || span <= 0.0 {
        return Vec::new();
    }
    let start = ((center - span / 2.0) / spacing).floor() * spacing;
    let count = (span / spacing).ceil() as usize + 1;
    (0..=count).map(|i| start + i as f64 * spacing).collect()
}
