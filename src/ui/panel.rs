//! Seitenleiste: Level-Auswahl, Alignment-Tabelle, Export/Abbrechen.

use crate::app::{alignment_rows, AlignmentRow, AppIntent, AppState};
use crate::shared::ViewSlot;

/// Rendert die Seitenleiste und gibt erzeugte Events zurück.
pub fn render_side_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("align_panel")
        .default_width(340.0)
        .min_width(260.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Ebenen");
            ui.separator();
            for slot in ViewSlot::ALL {
                render_level_selector(ui, state, slot, &mut events);
            }

            ui.separator();
            ui.heading("Ausrichtung");
            render_alignment_table(ui, &alignment_rows(state));

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Exportieren").clicked() {
                    events.push(AppIntent::ExportRequested);
                }
                if ui.button("Abbrechen").clicked() {
                    events.push(AppIntent::CancelRequested);
                }
            });

            ui.separator();
            ui.small("Strg + Klick, Klick: Ursprung (Position, Richtung)");
            ui.small("Klick, Klick: Ursprung der anderen Ebene auf dieser Ebene");
            ui.small("Ziehen am Punkt: verschieben, am Achsen-Ende: drehen");
        });

    events
}

fn render_level_selector(
    ui: &mut egui::Ui,
    state: &AppState,
    slot: ViewSlot,
    events: &mut Vec<AppIntent>,
) {
    let current = state.view.level(slot);
    let selected_text = state
        .building
        .level(current)
        .map_or_else(|| "-".to_string(), |level| level.name.clone());

    ui.horizontal(|ui| {
        ui.label(slot.label());
        egui::ComboBox::from_id_salt(("level_select", slot))
            .selected_text(selected_text)
            .width(200.0)
            .show_ui(ui, |ui| {
                for (level_index, level) in state.building.levels.iter().enumerate() {
                    if ui
                        .selectable_label(level_index == current, &level.name)
                        .clicked()
                        && level_index != current
                    {
                        events.push(AppIntent::LevelSelected { slot, level_index });
                    }
                }
            });
    });
}

fn render_alignment_table(ui: &mut egui::Ui, rows: &[AlignmentRow]) {
    if rows.is_empty() {
        ui.label("Noch keine Verbindungen");
        return;
    }

    egui::Grid::new("alignment_table")
        .striped(true)
        .num_columns(5)
        .show(ui, |ui| {
            ui.strong("Von");
            ui.strong("Nach");
            ui.strong("x [m]");
            ui.strong("y [m]");
            ui.strong("Yaw [°]");
            ui.end_row();

            for row in rows {
                ui.label(&row.source);
                ui.label(&row.target);
                ui.monospace(format!("{:.3}", row.x));
                ui.monospace(format!("{:.3}", row.y));
                ui.monospace(format!("{:.1}", row.yaw_degrees));
                ui.end_row();
            }
        });
}
