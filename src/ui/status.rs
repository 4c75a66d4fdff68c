//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, MouseStatus};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Gebäude: {} | Levels: {}",
                state.building.name,
                state.building.level_count()
            ));

            ui.separator();

            ui.label(format!(
                "Ursprünge: {} | Verbindungen: {}",
                state.store.origin_count(),
                state.relative_count()
            ));

            ui.separator();

            let mode = match state.session.mouse_status() {
                MouseStatus::Idle if state.session.is_clicked() => "Richtung klicken",
                MouseStatus::Idle => "Bereit",
                MouseStatus::MovePose => "Verschieben",
                MouseStatus::RotatePose => "Drehen",
            };
            ui.label(mode);

            if let Some(msg) = &state.ui.status_message {
                ui.separator();
                ui.label(msg);
            }
        });
    });
}
