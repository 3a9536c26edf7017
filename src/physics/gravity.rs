//! Pairwise gravitational force accumulation.
//!
//! Forces use the game constant `G` rather than SI units. Pairs closer than
//! the configured minimum distance are skipped entirely (not clamped), which
//! keeps the `1/r²` term away from its singularity.

use crate::body::Body;
use crate::config::PhysicsConfig;
use crate::math::Vector;
use crate::types::BodyId;

/// Gravitational force exerted on A by B: `G·m_a·m_b / r²` toward B.
///
/// Returns `None` when the centres are closer than `min_distance`.
#[inline]
pub fn pair_force(
    pos_a: Vector,
    mass_a: f64,
    pos_b: Vector,
    mass_b: f64,
    gravitational_constant: f64,
    min_distance: f64,
) -> Option<Vector> {
    let delta = pos_b - pos_a;
    let r_squared = delta.length_squared();
    let r = r_squared.sqrt();

    if r < min_distance || r == 0.0 {
        return None;
    }

    let magnitude = gravitational_constant * mass_a * mass_b / r_squared;
    // delta / r is the unit direction from A to B
    Some(delta * (magnitude / r))
}

/// Apply gravity to every unordered pair exactly once.
///
/// Pairs are visited in index order (`i < j`), so repeated calls on the
/// same state sum forces in the same order. Each pair gets equal and
/// opposite forces. Returns the number of pairs that interacted.
pub fn accumulate_gravity(bodies: &mut [(BodyId, Body)], config: &PhysicsConfig) -> usize {
    let mut interacting = 0;

    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let (a, b) = (&bodies[i].1, &bodies[j].1);
            let Some(force) = pair_force(
                a.position,
                a.mass(),
                b.position,
                b.mass(),
                config.gravitational_constant,
                config.min_distance,
            ) else {
                continue;
            };

            bodies[i].1.apply_force(force);
            bodies[j].1.apply_force(-force);
            interacting += 1;
        }
    }

    interacting
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::BodyConfig;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_pair_magnitude() {
        let force = pair_force(
            Vector::ZERO,
            1000.0,
            Vector::new(100.0, 0.0),
            1000.0,
            100.0,
            1.0,
        )
        .unwrap();

        // 100 · 1000 · 1000 / 100² = 10,000 toward B
        assert_relative_eq!(force.x, 10_000.0, max_relative = 1e-12);
        assert_eq!(force.y, 0.0);
    }

    #[test]
    fn test_pairs_below_min_distance_are_skipped() {
        assert!(pair_force(Vector::ZERO, 1.0, Vector::new(0.5, 0.0), 1.0, 100.0, 1.0).is_none());
        assert!(pair_force(Vector::ZERO, 1.0, Vector::ZERO, 1.0, 100.0, 0.0).is_none());
    }

    #[test]
    fn test_accumulate_applies_equal_and_opposite() {
        let config = PhysicsConfig::default();
        let mut bodies = vec![
            (
                BodyId(0),
                Body::new(BodyConfig::named("a").mass(1000.0)).unwrap(),
            ),
            (
                BodyId(1),
                Body::new(
                    BodyConfig::named("b")
                        .mass(1000.0)
                        .position(Vector::new(100.0, 0.0)),
                )
                .unwrap(),
            ),
        ];

        assert_eq!(accumulate_gravity(&mut bodies, &config), 1);

        let fa = bodies[0].1.acceleration() * bodies[0].1.mass();
        let fb = bodies[1].1.acceleration() * bodies[1].1.mass();
        assert_relative_eq!(fa.x, 10_000.0, max_relative = 1e-12);
        assert_relative_eq!(fb.x, -10_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_fixed_body_absorbs_nothing_but_still_pulls() {
        let config = PhysicsConfig::default();
        let mut bodies = vec![
            (
                BodyId(0),
                Body::new(BodyConfig::named("sun").mass(1.0e4).fixed(true)).unwrap(),
            ),
            (
                BodyId(1),
                Body::new(BodyConfig::named("probe").position(Vector::new(0.0, 100.0))).unwrap(),
            ),
        ];

        accumulate_gravity(&mut bodies, &config);
        assert_eq!(bodies[0].1.acceleration(), Vector::ZERO);
        // G·M / r² = 100 · 1e4 / 1e4
        assert_relative_eq!(bodies[1].1.acceleration().y, -100.0, max_relative = 1e-12);
    }
}
