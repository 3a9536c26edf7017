//! Property-based tests for the physics core using proptest.
//!
//! These check the conservation and bookkeeping invariants of a step over
//! arbitrary body layouts, not just hand-picked scenarios.

use proptest::prelude::*;
use std::f64::consts::TAU;

use super::World;
use crate::body::{Body, BodyConfig};
use crate::config::{OrbitVelocityModel, ShipSpec};
use crate::math::Vector;
use crate::test_utils::{assertions, fixtures};

fn arb_position() -> impl Strategy<Value = Vector> {
    (-1000.0f64..1000.0, -1000.0f64..1000.0).prop_map(|(x, y)| Vector::new(x, y))
}

fn arb_body() -> impl Strategy<Value = Body> {
    (0.1f64..1e4, 0.0f64..50.0, arb_position()).prop_map(|(mass, radius, position)| {
        Body::new(
            BodyConfig::named("prop")
                .mass(mass)
                .radius(radius)
                .position(position),
        )
        .expect("strategy produces valid bodies")
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every pair pushes both bodies with equal and opposite forces, so the
    /// accumulated `Σ m·a` of a free system is zero.
    #[test]
    fn prop_gravity_obeys_third_law(bodies in prop::collection::vec(arb_body(), 2..8)) {
        let mut world = World::default();
        for body in bodies {
            world.add_body(body);
        }
        world.accumulate_gravity();

        let bodies: Vec<&Body> = world.iter().map(|(_, body)| body).collect();
        assertions::assert_forces_balance(bodies.iter().copied(), 1e-9);
    }

    /// A fixed body never moves, accelerates or records a trail.
    #[test]
    fn prop_fixed_body_is_immovable(
        position in arb_position(),
        force in arb_position(),
        dt in 0.0f64..100.0,
    ) {
        let mut anchor = Body::new(
            BodyConfig::named("anchor").mass(1e4).position(position).fixed(true),
        )
        .expect("valid anchor");
        anchor.apply_force(force);
        anchor.integrate(dt);

        prop_assert_eq!(anchor.position, position);
        prop_assert_eq!(anchor.velocity, Vector::ZERO);
        prop_assert_eq!(anchor.acceleration(), Vector::ZERO);
        prop_assert!(anchor.trail().is_empty());
    }

    /// The trail never outgrows its capacity.
    #[test]
    fn prop_trail_is_bounded(capacity in 1usize..64, steps in 0usize..200) {
        let mut body = Body::new(
            BodyConfig::named("trail")
                .trail_length(capacity)
                .velocity(Vector::new(1.0, 0.5)),
        )
        .expect("valid body");

        for _ in 0..steps {
            body.integrate(0.1);
            prop_assert!(body.trail().len() <= capacity);
        }
        prop_assert_eq!(body.trail().len(), steps.min(capacity));
    }

    /// Collision tests do not depend on argument order.
    #[test]
    fn prop_collision_is_symmetric(a in arb_body(), b in arb_body()) {
        prop_assert_eq!(a.is_colliding(&b), b.is_colliding(&a));
    }

    /// After an orbit update the body sits exactly on its circle.
    #[test]
    fn prop_orbit_keeps_radius(
        radius in 1.0f64..5000.0,
        angular_speed in -0.01f64..0.01,
        phase in 0.0f64..TAU,
        dt in 0.001f64..200.0,
        center in arb_position(),
    ) {
        let mut planet = fixtures::orbiting("planet", radius, angular_speed, phase);
        planet.update_orbit(dt, center, OrbitVelocityModel::PerStep);

        let distance = planet.position.distance(center);
        prop_assert!(
            (distance - radius).abs() <= 1e-9 * radius.max(1.0),
            "distance {} vs radius {}", distance, radius
        );
    }

    /// Fuel only goes down under thrust and stays at zero once empty, where
    /// no more force is produced.
    #[test]
    fn prop_fuel_is_monotonic(dts in prop::collection::vec(0.001f64..5000.0, 1..40)) {
        let mut ship = fixtures::ship_at(Vector::ZERO);
        let mut previous = ShipSpec::default().fuel_capacity;

        for dt in dts {
            let before = ship.acceleration();
            let thrusted = ship.apply_thrust(dt);
            let fuel = ship.ship().expect("is a ship").fuel();

            prop_assert!(fuel <= previous);
            prop_assert!(fuel >= 0.0);
            if previous == 0.0 {
                prop_assert!(!thrusted);
                prop_assert_eq!(ship.acceleration(), before);
            }
            previous = fuel;
            ship.integrate(dt.min(1.0));
        }
    }
}
