//! Physics engine: the owned set of bodies and one simulation step.
//!
//! A step accumulates pairwise gravity, then integrates every body with
//! semi-implicit Euler. Orbit-constrained bodies are repositioned by
//! [`World::update_orbits`] and are held in place by the integration.

mod gravity;
mod integrator;

#[cfg(test)]
mod proptest_physics;

use bevy::log::debug;

pub use gravity::{accumulate_gravity, pair_force};
pub use integrator::semi_implicit_euler;

use crate::body::Body;
use crate::collision::Contact;
use crate::config::PhysicsConfig;
use crate::types::BodyId;

/// The set of simulated bodies.
///
/// Bodies keep their insertion order, which fixes the pair iteration order
/// and therefore the floating-point summation order of forces.
#[derive(Clone, Debug, Default)]
pub struct World {
    bodies: Vec<(BodyId, Body)>,
    next_id: u32,
    config: PhysicsConfig,
}

impl World {
    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            bodies: Vec::new(),
            next_id: 0,
            config,
        }
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Take ownership of `body` and return its handle.
    pub fn add_body(&mut self, body: Body) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.push((id, body));
        id
    }

    /// Remove a body. Removing an absent body is a no-op returning `None`.
    pub fn remove_body(&mut self, id: BodyId) -> Option<Body> {
        let index = self.bodies.iter().position(|(other, _)| *other == id)?;
        Some(self.bodies.remove(index).1)
    }

    /// Drop every body. Handles issued before the clear never resolve again.
    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies
            .iter()
            .find_map(|(other, body)| (*other == id).then_some(body))
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies
            .iter_mut()
            .find_map(|(other, body)| (*other == id).then_some(body))
    }

    /// Bodies in iteration order.
    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &Body)> {
        self.bodies.iter().map(|(id, body)| (*id, body))
    }

    pub fn ids(&self) -> impl Iterator<Item = BodyId> + '_ {
        self.bodies.iter().map(|(id, _)| *id)
    }

    /// Apply gravity to every unordered pair without integrating.
    ///
    /// Returns the number of pairs that interacted.
    pub fn accumulate_gravity(&mut self) -> usize {
        accumulate_gravity(&mut self.bodies, &self.config)
    }

    /// Integrate every body by `dt`, draining the force accumulators.
    pub fn integrate(&mut self, dt: f64) {
        for (_, body) in &mut self.bodies {
            body.integrate(dt);
        }
    }

    /// One physics step: gravity for all pairs, then integration.
    pub fn step(&mut self, dt: f64) {
        let pairs = self.accumulate_gravity();
        self.integrate(dt);
        debug!("Physics step dt={dt:.4}: {pairs} interacting pairs");
    }

    /// Advance every orbit-constrained body around `center`.
    ///
    /// Does nothing if `center` is not in the world.
    pub fn update_orbits(&mut self, dt: f64, center: BodyId) {
        let Some(center_pos) = self.get(center).map(|body| body.position) else {
            return;
        };
        let model = self.config.orbit_velocity;
        for (id, body) in &mut self.bodies {
            if *id != center {
                body.update_orbit(dt, center_pos, model);
            }
        }
    }

    /// Every unordered pair currently interpenetrating.
    ///
    /// A fresh O(n²) scan; body counts stay in the tens.
    pub fn detect_collisions(&self) -> Vec<Contact> {
        let mut contacts = Vec::new();
        for (i, (id_a, a)) in self.bodies.iter().enumerate() {
            for (id_b, b) in &self.bodies[i + 1..] {
                if a.is_colliding(b) {
                    contacts.push(Contact::new(*id_a, *id_b));
                }
            }
        }
        contacts
    }

    /// First other body (in iteration order) interpenetrating `id`.
    pub fn find_collision_partner(&self, id: BodyId) -> Option<BodyId> {
        let body = self.get(id)?;
        self.bodies
            .iter()
            .find(|(other_id, other)| *other_id != id && body.is_colliding(other))
            .map(|(other_id, _)| *other_id)
    }
}
