//! Zusammenfassungs-Tabelle aller Relationen (Anzeige im Dialog).

use crate::app::AppState;
use crate::core::relative_transform;

/// Eine Zeile der Alignment-Tabelle.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentRow {
    /// Name des Quell-Levels
    pub source: String,
    /// Name des Ziel-Levels
    pub target: String,
    /// Exportierter Versatz X (Meter)
    pub x: f64,
    /// Exportierter Versatz Y (Meter)
    pub y: f64,
    /// Relative Drehung in Grad
    pub yaw_degrees: f64,
}

/// Listet alle Relationen in Export-Reihenfolge.
pub fn alignment_rows(state: &AppState) -> Vec<AlignmentRow> {
    state
        .store
        .origins()
        .flat_map(|info| {
            let meters_per_pixel = state.building.meters_per_pixel(&info.level_name);
            state
                .store
                .relatives_from(info.level_index)
                .map(move |(_, relative)| {
                    let transform =
                        relative_transform(&info.origin, &relative.pose, meters_per_pixel);
                    AlignmentRow {
                        source: info.level_name.clone(),
                        target: relative.target_name.clone(),
                        x: transform.position.x,
                        y: transform.position.y,
                        yaw_degrees: transform.yaw.to_degrees(),
                    }
                })
        })
        .collect()
}
