//! Test utilities for the lander simulation.
//!
//! Fixtures build small worlds and scenarios with predictable geometry;
//! assertions check the physical invariants the engine relies on.

use crate::body::{Body, BodyConfig};
use crate::math::Vector;

/// Fixtures for bodies, worlds and scenarios.
pub mod fixtures {
    use super::*;
    use crate::body::Orbit;
    use crate::config::ShipSpec;
    use crate::scenarios::{PlanetSpec, Scenario, SpawnSpec};

    /// A free body with the given mass at `position`.
    pub fn point_mass(name: &str, mass: f64, position: Vector) -> Body {
        Body::new(BodyConfig::named(name).mass(mass).position(position))
            .expect("fixture body is valid")
    }

    /// A fully fuelled default ship at `position`, nose along +x.
    pub fn ship_at(position: Vector) -> Body {
        Body::ship(
            BodyConfig::named("Ship").position(position),
            &ShipSpec::default(),
            0.0,
        )
        .expect("fixture ship is valid")
    }

    /// A planet on a circular orbit of `radius` around the origin.
    pub fn orbiting(name: &str, radius: f64, angular_speed: f64, phase: f64) -> Body {
        Body::orbiting(
            BodyConfig::named(name).mass(1.0).radius(10.0),
            Orbit::new(radius, angular_speed, phase),
        )
        .expect("fixture planet is valid")
    }

    /// A near-massless anchor with one stationary, near-massless planet
    /// ("Pad", radius 20) at (300, 0). Gravity is negligible, so staged
    /// approaches keep their speed up to contact.
    pub fn landing_pad_scenario() -> Scenario {
        Scenario {
            anchor: BodyConfig::named("Anchor").mass(1e-6).radius(1.0),
            planets: vec![
                PlanetSpec::new(BodyConfig::named("Pad").mass(1e-3).radius(20.0), 300.0, 0.0)
                    .with_phase(0.0),
            ],
            ship_spawn: SpawnSpec {
                reference: "Pad".to_owned(),
                clearance: 20.0,
                orientation: 0.0,
            },
            ..Scenario::default()
        }
    }
}

/// Assertions for physical invariants.
pub mod assertions {
    use super::*;

    /// Net momentum change rate `Σ m·a` over a set of bodies.
    pub fn net_force<'a>(bodies: impl IntoIterator<Item = &'a Body>) -> Vector {
        bodies
            .into_iter()
            .map(|body| body.acceleration() * body.mass())
            .sum()
    }

    /// Assert that the accumulated forces cancel out.
    ///
    /// # Panics
    /// Panics if `|Σ m·a|` exceeds `tolerance` times the largest single force.
    pub fn assert_forces_balance<'a>(bodies: impl IntoIterator<Item = &'a Body> + Clone, tolerance: f64) {
        let largest = bodies
            .clone()
            .into_iter()
            .map(|body| (body.acceleration() * body.mass()).length())
            .fold(0.0, f64::max);
        let net = net_force(bodies).length();
        assert!(
            net <= tolerance * largest.max(1.0),
            "Forces do not balance: net={net:.6e}, largest={largest:.6e}"
        );
    }
}

pub use fixtures::landing_pad_scenario;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_pad_is_valid() {
        let scenario = fixtures::landing_pad_scenario();
        assert_eq!(scenario.planets.len(), 1);
        assert_eq!(scenario.ship_spawn.reference, "Pad");
    }

    #[test]
    fn test_net_force_of_pair() {
        let mut a = fixtures::point_mass("a", 2.0, Vector::ZERO);
        let mut b = fixtures::point_mass("b", 4.0, Vector::X);
        a.apply_force(Vector::new(8.0, 0.0));
        b.apply_force(Vector::new(-8.0, 0.0));
        assert_eq!(assertions::net_force([&a, &b]), Vector::ZERO);
        assertions::assert_forces_balance([&a, &b], 1e-12);
    }
}
