//! Built-in scenarios.
//!
//! Radii, orbit radii, angular speeds and colors follow the classic inner
//! solar system layout of the game. Masses are game-scale, tuned against a
//! gravitational constant of 100 so that the ship's engine can out-pull the
//! sun and a planet's surface gravity is gentle enough to land on.

use super::{PlanetSpec, Scenario, SpawnSpec};
use crate::body::BodyConfig;
use crate::types::Rgb;

const SUN_COLOR: Rgb = Rgb::new(0xFD, 0xB8, 0x13);
const SUN_GLOW: Rgb = Rgb::new(0xFF, 0x6B, 0x00);
const THRUST_COLOR: Rgb = Rgb::new(0xFF, 0x45, 0x00);

/// Sun plus Mercury, Venus, Earth and Mars; the ship starts beside Earth.
pub fn inner_system() -> Scenario {
    let planet = |name: &str, mass: f64, radius: f64, atmosphere: f64, color: Rgb| {
        BodyConfig::named(name)
            .mass(mass)
            .radius(radius)
            .atmosphere(atmosphere)
            .color(color)
    };

    Scenario {
        name: "Inner System",
        description: "Land softly on any of the four inner planets.",
        anchor: BodyConfig::named("Sun")
            .mass(1.0e4)
            .radius(30.0)
            .color(SUN_COLOR)
            .glow(SUN_GLOW),
        planets: vec![
            PlanetSpec::new(
                planet("Mercury", 0.5, 8.0, 0.0, Rgb::new(0x8C, 0x78, 0x53)),
                200.0,
                0.0002,
            ),
            PlanetSpec::new(
                planet("Venus", 4.0, 12.0, 250.0, Rgb::new(0xFF, 0xC6, 0x49)),
                300.0,
                0.00015,
            ),
            PlanetSpec::new(
                planet("Earth", 5.0, 13.0, 100.0, Rgb::new(0x4A, 0x90, 0xE2)),
                400.0,
                0.0001,
            ),
            PlanetSpec::new(
                planet("Mars", 1.5, 10.0, 50.0, Rgb::new(0xE2, 0x7B, 0x58)),
                500.0,
                0.00008,
            ),
        ],
        ship_spawn: SpawnSpec {
            reference: "Earth".to_owned(),
            clearance: 20.0,
            orientation: 0.0,
        },
        ship_color: Rgb::WHITE,
        thrust_color: THRUST_COLOR,
    }
}
