use crate::app::interaction::PointerEvent;
use crate::shared::ViewSlot;

/// Mutierende Commands, die der Controller auf dem AppState ausführt.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // === Interaktion ===
    /// Pointer-Event an die Interaktions-State-Machine geben
    HandlePointer { event: PointerEvent },
    /// Transienten Interaktionszustand verwerfen (Overlays, Label, Geste)
    ResetInteraction,

    // === Ansichten ===
    /// Level einer Ansicht wechseln
    SelectLevel { slot: ViewSlot, level_index: usize },

    // === Export ===
    /// Speicherdialog für den Export anfordern
    RequestExportDialog,
    /// Alignment-Dokument an Pfad schreiben
    ExportAlignment { path: String },

    // === Dialoge & Anwendungssteuerung ===
    /// Blockierende Meldung schließen
    DismissNotification,
    /// Anwendung kontrolliert beenden
    RequestExit,
}
