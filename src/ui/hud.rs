//! Flight HUD: speed, altitude, fuel and time scale.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::icons;
use crate::camera::CameraRig;
use crate::math::Vector;
use crate::session::{HudSnapshot, Session};
use crate::types::altitude_km;

/// Below this fuel percentage the gauge turns red.
const LOW_FUEL_PERCENT: f64 = 20.0;

/// Formatted HUD values.
#[derive(Clone, Debug, PartialEq)]
pub struct HudLines {
    pub speed: String,
    pub altitude: String,
    pub fuel: String,
    pub time_scale: String,
    pub low_fuel: bool,
}

impl From<&HudSnapshot> for HudLines {
    fn from(hud: &HudSnapshot) -> Self {
        let altitude = match &hud.min_altitude {
            Some((name, altitude)) => format!("{:.1} km ({name})", altitude_km(*altitude)),
            None => "--".to_owned(),
        };
        Self {
            speed: format!("{:.1} m/s", hud.speed),
            altitude,
            fuel: format!("{:.0}%", hud.fuel_percent),
            time_scale: hud.time_scale.to_string(),
            low_fuel: hud.fuel_percent < LOW_FUEL_PERCENT,
        }
    }
}

/// HUD panel in the top-left corner while a session exists.
pub fn hud_system(mut contexts: EguiContexts, session: Res<Session>, mut rig: ResMut<CameraRig>) {
    let Some(hud) = session.hud() else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let lines = HudLines::from(&hud);

    egui::Window::new("hud")
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(12.0, 12.0))
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            egui::Grid::new("hud_grid").num_columns(2).show(ui, |ui| {
                ui.label(format!("{} Speed", icons::SPEED));
                ui.monospace(&lines.speed);
                ui.end_row();

                ui.label(format!("{} Altitude", icons::ALTITUDE));
                ui.monospace(&lines.altitude);
                ui.end_row();

                ui.label(format!("{} Fuel", icons::FUEL));
                let fuel = egui::RichText::new(&lines.fuel).monospace();
                ui.label(if lines.low_fuel {
                    fuel.color(egui::Color32::from_rgb(220, 50, 50))
                } else {
                    fuel
                });
                ui.end_row();

                ui.label(format!("{} Time", icons::TIME_SCALE));
                ui.monospace(&lines.time_scale);
                ui.end_row();
            });

            ui.separator();
            if ui
                .small_button(format!("{} Overview", icons::OVERVIEW))
                .on_hover_text("Zoom to fit every body")
                .clicked()
            {
                let size = ui.ctx().screen_rect().size();
                let viewport = Vector::new(size.x as f64, size.y as f64);
                rig.auto_zoom(session.world().iter().map(|(_, body)| body), viewport);
            }
        });
}
