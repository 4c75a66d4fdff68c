use crate::shared::ViewSlot;
use glam::DVec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
///
/// Pointer-Positionen liegen bereits im Pixel-Raum des Level-Bildes der
/// jeweiligen Ansicht; `view: None` bedeutet "außerhalb beider Ansichten".
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Maustaste gedrückt
    PointerPressed {
        view: Option<ViewSlot>,
        pixel_pos: DVec2,
        ctrl: bool,
    },
    /// Maus bewegt (mit oder ohne gedrückte Taste)
    PointerMoved {
        view: Option<ViewSlot>,
        pixel_pos: DVec2,
        ctrl: bool,
    },
    /// Maustaste losgelassen
    PointerReleased {
        view: Option<ViewSlot>,
        pixel_pos: DVec2,
    },
    /// Mauszeiger hat beide Ansichten verlassen
    PointerLeft,
    /// Anderes Level in einer Ansicht gewählt
    LevelSelected { slot: ViewSlot, level_index: usize },
    /// Export angefordert (zeigt Speicherdialog)
    ExportRequested,
    /// Export-Pfad wurde im Dialog gewählt
    ExportPathSelected { path: String },
    /// Blockierende Meldung bestätigt
    NotificationDismissed,
    /// Dialog abbrechen / Anwendung beenden
    CancelRequested,
}
