//! Start menu and game-over overlay.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::icons;
use crate::outcome::SessionOutcome;
use crate::session::{Session, SessionError, SessionState};

/// Last setup failure, shown on the start menu.
#[derive(Resource, Default)]
pub struct SetupFailure(pub Option<SessionError>);

const CONTROLS_HELP: &[(&str, &str)] = &[
    ("← / A, → / D", "rotate"),
    ("↑ / W / Space", "thrust"),
    ("T", "cycle time scale"),
    ("R", "restart"),
    ("Z / X", "zoom in / out"),
];

/// Centered menu while the session is uninitialized.
pub fn start_menu_system(
    mut contexts: EguiContexts,
    mut session: ResMut<Session>,
    mut failure: ResMut<SetupFailure>,
) {
    if *session.state() != SessionState::Uninitialized {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut start = false;
    egui::Window::new("start_menu")
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(format!("{} Orbital Lander", icons::SHIP));
                ui.label(session.scenario().description);
                ui.add_space(8.0);

                egui::Grid::new("controls_help").num_columns(2).show(ui, |ui| {
                    for (keys, action) in CONTROLS_HELP {
                        ui.monospace(*keys);
                        ui.label(*action);
                        ui.end_row();
                    }
                });
                ui.add_space(8.0);

                if let Some(err) = &failure.0 {
                    ui.colored_label(egui::Color32::from_rgb(220, 50, 50), err.to_string());
                }
                start = ui
                    .button(egui::RichText::new(format!("{} Start", icons::START)).size(18.0))
                    .clicked();
            });
        });

    if start {
        failure.0 = session.start().err();
        if let Some(err) = &failure.0 {
            error!("Could not start session: {err}");
        }
    }
}

/// Overlay title and body text for an outcome.
pub fn outcome_text(outcome: &SessionOutcome) -> (String, String) {
    let icon = if outcome.outcome.is_success() {
        icons::LANDED
    } else {
        icons::CRASHED
    };
    let event = &outcome.event;
    let detail = format!(
        "{}\nImpact speed: {:.1} m/s\nApproach angle: {:.0}°",
        outcome.message(),
        event.impact_speed,
        event.approach_angle.to_degrees()
    );
    (format!("{icon} {}", outcome.headline()), detail)
}

/// Result overlay once the session has ended.
pub fn game_over_system(
    mut contexts: EguiContexts,
    mut session: ResMut<Session>,
    mut failure: ResMut<SetupFailure>,
) {
    let Some(outcome) = session.outcome() else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let (title, detail) = outcome_text(outcome);
    let color = if outcome.outcome.is_success() {
        egui::Color32::from_rgb(50, 200, 80)
    } else {
        egui::Color32::from_rgb(220, 50, 50)
    };

    let mut restart = false;
    egui::Window::new("game_over")
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, -40.0))
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(title).size(24.0).strong().color(color));
                ui.label(detail);
                ui.add_space(8.0);
                restart = ui
                    .button(format!("{} Restart", icons::RESTART))
                    .clicked();
            });
        });

    if restart {
        failure.0 = session.restart().err();
        if let Some(err) = &failure.0 {
            error!("Could not restart session: {err}");
        }
    }
}
