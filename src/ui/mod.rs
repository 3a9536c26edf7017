//! UI module providing the egui HUD and menus.

mod hud;
pub mod icons;
mod labels;
mod menus;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub use hud::HudLines;
pub use menus::{SetupFailure, outcome_text};

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<icons::FontsInitialized>()
            .init_resource::<SetupFailure>()
            // Font initialization MUST run before any UI systems that use icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    labels::body_labels_system,
                    hud::hud_system,
                    menus::start_menu_system,
                    menus::game_over_system,
                )
                    .after(icons::setup_fonts)
                    .run_if(|init: Res<icons::FontsInitialized>| init.0),
            );
    }
}
