//! Orbital Lander - 2D gravity landing game
//!
//! A library crate providing the simulation core (bodies, gravity, orbit
//! constraints, ship control, session state machine) and the Bevy plugins
//! that present it.

pub mod app;
pub mod body;
pub mod camera;
pub mod collision;
pub mod config;
pub mod input;
pub mod math;
pub mod outcome;
pub mod physics;
pub mod render;
pub mod scenarios;
pub mod session;
pub mod time;
pub mod types;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
