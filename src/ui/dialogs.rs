//! Modale Meldung und Export-Speicherdialog.

use crate::app::{AppIntent, UiState};

/// Zeigt eine blockierende Meldung als modales Fenster.
pub fn show_notification(ctx: &egui::Context, notification: Option<&str>) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(message) = notification else {
        return events;
    };

    egui::Window::new("Hinweis")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                ui.label(message);
                ui.add_space(10.0);

                if ui.button("OK").clicked() {
                    events.push(AppIntent::NotificationDismissed);
                }
            });
        });

    events
}

/// Öffnet bei Bedarf den Export-Speicherdialog und gibt AppIntents zurück.
///
/// Abbrechen im Dialog erzeugt kein Event.
pub fn handle_export_dialog(
    ui_state: &mut UiState,
    export_suffix: &str,
    building_name: &str,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !ui_state.show_export_dialog {
        return events;
    }
    ui_state.show_export_dialog = false;

    let extension = export_suffix.trim_start_matches('.');
    let default_name = default_export_name(building_name, export_suffix);

    let mut dialog = rfd::FileDialog::new().set_file_name(default_name);
    if !extension.is_empty() {
        dialog = dialog.add_filter("Level-Alignment", &[extension]);
    }

    if let Some(path) = dialog.save_file() {
        events.push(AppIntent::ExportPathSelected {
            path: path.to_string_lossy().into_owned(),
        });
    }

    events
}

fn default_export_name(building_name: &str, export_suffix: &str) -> String {
    let stem = if building_name.is_empty() {
        "building"
    } else {
        building_name
    };
    format!("{}_alignment{}", stem, export_suffix)
}
