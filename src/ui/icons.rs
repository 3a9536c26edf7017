//! Phosphor icon definitions for the UI.
//!
//! Icons are initialized via `setup_fonts` when the app starts.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

/// Resource to track if fonts have been initialized.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

/// System to initialize Phosphor icon fonts.
/// Runs in EguiPrimaryContextPass where the egui context is guaranteed to be ready.
pub fn setup_fonts(mut contexts: EguiContexts, mut initialized: ResMut<FontsInitialized>) {
    if initialized.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
    initialized.0 = true;

    info!("Phosphor icon fonts initialized");
}

pub const SHIP: &str = egui_phosphor::regular::ROCKET;
pub const SPEED: &str = egui_phosphor::regular::GAUGE;
pub const FUEL: &str = egui_phosphor::regular::GAS_PUMP;
pub const TIME_SCALE: &str = egui_phosphor::regular::FAST_FORWARD;
pub const ALTITUDE: &str = egui_phosphor::regular::GLOBE;
pub const START: &str = egui_phosphor::regular::PLAY;
pub const RESTART: &str = egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE;
pub const LANDED: &str = egui_phosphor::regular::CHECK_CIRCLE;
pub const CRASHED: &str = egui_phosphor::regular::WARNING;
/// Frame the whole system.
pub const OVERVIEW: &str = egui_phosphor::regular::CORNERS_OUT;
