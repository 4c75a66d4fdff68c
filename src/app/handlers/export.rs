//! Handler für den Alignment-Export.

use crate::app::use_cases;
use crate::app::AppState;

/// Öffnet den Export-Speicherdialog.
pub fn request_dialog(state: &mut AppState) {
    use_cases::export::request_export_dialog(state);
}

/// Schreibt das Alignment an den gewählten Pfad.
pub fn export(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::export::export_to_path(state, &path)
}
