//! Ship-specific state: fuel, orientation and the thrust model.
//!
//! The ship's mass is its dry mass plus whatever fuel remains, so burning
//! fuel also weakens gravity on and from the ship.

use crate::config::ShipSpec;
use crate::math::{Vector, VectorExt};

/// Kind-specific data of a player ship.
#[derive(Clone, Debug, PartialEq)]
pub struct ShipState {
    /// Remaining fuel, always within `[0, fuel_capacity]`.
    fuel: f64,
    /// Heading of the nose in radians. Accumulates without wraparound.
    pub orientation: f64,
    /// Whether thrust was applied this tick. Derived from input every tick.
    pub thrusting: bool,
    pub dry_mass: f64,
    pub fuel_capacity: f64,
    pub max_thrust: f64,
    pub fuel_consumption_rate: f64,
    pub rotation_step: f64,
}

impl ShipState {
    /// A fully fuelled ship pointing along `orientation`.
    pub fn new(spec: &ShipSpec, orientation: f64) -> Self {
        let fuel_capacity = spec.fuel_capacity.max(0.0);
        Self {
            fuel: fuel_capacity,
            orientation,
            thrusting: false,
            dry_mass: spec.dry_mass,
            fuel_capacity,
            max_thrust: spec.max_thrust,
            fuel_consumption_rate: spec.fuel_consumption_rate,
            rotation_step: spec.rotation_step,
        }
    }

    pub fn fuel(&self) -> f64 {
        self.fuel
    }

    /// Set the fuel level, clamped into `[0, fuel_capacity]`.
    pub fn set_fuel(&mut self, fuel: f64) {
        self.fuel = fuel.clamp(0.0, self.fuel_capacity);
    }

    pub fn refuel(&mut self) {
        self.fuel = self.fuel_capacity;
    }

    /// Remaining fuel as a percentage of capacity.
    pub fn fuel_percent(&self) -> f64 {
        if self.fuel_capacity > 0.0 {
            self.fuel / self.fuel_capacity * 100.0
        } else {
            0.0
        }
    }

    /// Dry mass plus remaining fuel.
    pub fn effective_mass(&self) -> f64 {
        self.dry_mass + self.fuel
    }

    /// Unit vector along the nose.
    pub fn heading(&self) -> Vector {
        Vector::from_polar(self.orientation, 1.0)
    }

    /// Fire the engine for `dt`, returning the thrust force.
    ///
    /// With an empty tank nothing is burned, `thrusting` is cleared and no
    /// force is produced. A non-positive `dt` burns nothing.
    pub fn burn(&mut self, dt: f64) -> Option<Vector> {
        if self.fuel <= 0.0 {
            self.thrusting = false;
            return None;
        }

        let force = Vector::from_polar(self.orientation, self.max_thrust);
        let burned = self.fuel_consumption_rate * dt.max(0.0);
        self.fuel = (self.fuel - burned).clamp(0.0, self.fuel_capacity);
        self.thrusting = true;
        Some(force)
    }

    /// Turn by one `rotation_step` in the direction of `direction`'s sign.
    ///
    /// Only the sign matters; zero (or NaN) does nothing.
    pub fn rotate(&mut self, direction: f64) {
        if direction > 0.0 {
            self.orientation += self.rotation_step;
        } else if direction < 0.0 {
            self.orientation -= self.rotation_step;
        }
    }
}
