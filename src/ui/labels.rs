//! Body name labels drawn just below each body.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::camera::CameraRig;
use crate::math::Vector;
use crate::session::Session;

const LABEL_GAP: f32 = 4.0;

pub fn body_labels_system(mut contexts: EguiContexts, session: Res<Session>, rig: Res<CameraRig>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let screen = ctx.screen_rect();
    let viewport = Vector::new(screen.width() as f64, screen.height() as f64);
    let painter = ctx.layer_painter(egui::LayerId::background());

    for (_, body) in session.world().iter().filter(|(_, body)| !body.is_ship()) {
        let at = rig.world_to_screen(body.position, viewport);
        let below = at.y as f32 + (body.radius() * rig.zoom()) as f32 + LABEL_GAP;
        let pos = egui::pos2(at.x as f32, below);
        if !screen.expand(50.0).contains(pos) {
            continue;
        }
        painter.text(
            pos,
            egui::Align2::CENTER_TOP,
            body.name(),
            egui::FontId::proportional(12.0),
            egui::Color32::WHITE,
        );
    }
}
