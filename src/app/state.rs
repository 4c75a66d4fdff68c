//! Application State — zentrale Datenhaltung.

mod app_state;

pub use app_state::AppState;

use crate::shared::ViewSlot;

/// Welche Levels die beiden Ansichten zeigen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    /// Level der linken Ansicht
    pub first_level: usize,
    /// Level der rechten Ansicht
    pub second_level: usize,
}

impl ViewState {
    /// Startbelegung: Level 0 links, Level 1 rechts (falls vorhanden).
    pub fn new(level_count: usize) -> Self {
        Self {
            first_level: 0,
            second_level: if level_count > 1 { 1 } else { 0 },
        }
    }

    /// Level einer Ansicht.
    pub fn level(&self, slot: ViewSlot) -> usize {
        match slot {
            ViewSlot::First => self.first_level,
            ViewSlot::Second => self.second_level,
        }
    }

    /// Setzt das Level einer Ansicht.
    pub fn set_level(&mut self, slot: ViewSlot, level_index: usize) {
        match slot {
            ViewSlot::First => self.first_level = level_index,
            ViewSlot::Second => self.second_level = level_index,
        }
    }
}

/// UI-bezogener Zustand (Dialoge, Meldungen)
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Blockierende Meldung (modal, bis bestätigt)
    pub notification: Option<String>,
    /// Nicht-blockierende Statusmeldung
    pub status_message: Option<String>,
    /// Ob der Export-Speicherdialog geöffnet werden soll
    pub show_export_dialog: bool,
    /// Pfad des letzten erfolgreichen Exports
    pub last_export_path: Option<String>,
}

impl UiState {
    /// Erstellt einen leeren UI-State.
    pub fn new() -> Self {
        Self::default()
    }
}
