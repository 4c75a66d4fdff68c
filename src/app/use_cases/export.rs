//! Use-Case-Funktionen für den Alignment-Export.
//! Alle Dateisystem-Operationen (I/O) des Exports sind hier zentralisiert.

use crate::app::AppState;
use crate::export::{build_alignment_document, connection_count, write_alignment_file};
use anyhow::Context;
use std::path::Path;

/// Öffnet den Export-Speicherdialog über UI-State.
pub fn request_export_dialog(state: &mut AppState) {
    state.ui.show_export_dialog = true;
}

/// Exportiert alle Ursprünge und relativen Posen nach `path`.
///
/// Die Dateiendung aus den Optionen wird bei Bedarf angehängt. Ein
/// I/O-Fehler lässt den AppState unverändert.
pub fn export_to_path(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    state.ui.show_export_dialog = false;

    let document = build_alignment_document(&state.store, &state.building);
    let written = write_alignment_file(&document, Path::new(path), &state.options.export_suffix)
        .with_context(|| format!("Alignment-Export nach '{}' fehlgeschlagen", path))?;

    let msg = format!(
        "Alignment exportiert: {} ({} Levels, {} Verbindungen)",
        written.display(),
        document.len(),
        connection_count(&document)
    );
    log::info!("{}", msg);
    state.ui.status_message = Some(msg);
    state.ui.last_export_path = Some(written.to_string_lossy().into_owned());
    Ok(())
}
