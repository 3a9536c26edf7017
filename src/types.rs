//! Shared identifiers, colors and display constants.

use std::fmt;

/// Display conversion used by the HUD: ten world units per kilometre.
pub const WORLD_UNITS_PER_KM: f64 = 10.0;

/// Stable handle to a body owned by a [`crate::physics::World`].
///
/// Handles are never reused within one world, so a stale handle simply
/// stops resolving after the body is removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub(crate) u32);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 8-bit sRGB color carried by bodies for the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as floats in [0, 1].
    pub fn to_f32(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Convert a world-unit altitude to HUD kilometres.
pub fn altitude_km(world_units: f64) -> f64 {
    world_units / WORLD_UNITS_PER_KM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels_normalized() {
        assert_eq!(Rgb::WHITE.to_f32(), [1.0, 1.0, 1.0]);
        assert_eq!(Rgb::new(0, 0, 0).to_f32(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_altitude_conversion() {
        assert_eq!(altitude_km(25.0), 2.5);
    }
}
