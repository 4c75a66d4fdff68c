use crate::app::interaction::InteractionSession;
use crate::app::CommandLog;
use crate::core::{AlignmentStore, Building, ColorGenerator};
use crate::shared::AlignOptions;

use super::{UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Gebäude mit allen Levels (read-only)
    pub building: Building,
    /// Ursprünge und relative Posen
    pub store: AlignmentStore,
    /// Level-Belegung der beiden Ansichten
    pub view: ViewState,
    /// Transienter Interaktionszustand
    pub session: InteractionSession,
    /// UI-State
    pub ui: UiState,
    /// Laufzeit-Optionen
    pub options: AlignOptions,
    /// Farbvergabe für neue Ursprünge
    pub colors: ColorGenerator,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Zählt jede Mutation des Stores (Anzeige neu aufbauen)
    pub revision: u64,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt den State für ein Gebäude.
    ///
    /// Mit `seed_default_origins` bekommt jedes Level einen Ursprung in der
    /// Bildmitte (Orientierung 0).
    pub fn new(building: Building, options: AlignOptions) -> Self {
        let mut state = Self {
            view: ViewState::new(building.level_count()),
            building,
            store: AlignmentStore::new(),
            session: InteractionSession::new(),
            ui: UiState::new(),
            colors: ColorGenerator::new(options.color_seed),
            options,
            command_log: CommandLog::new(),
            revision: 0,
            should_exit: false,
        };

        if state.options.seed_default_origins {
            state.seed_default_origins();
        }
        state
    }

    fn seed_default_origins(&mut self) {
        for (index, level) in self.building.levels.iter().enumerate() {
            if self.store.set_origin_default(
                index,
                &level.name,
                level.drawing_width,
                level.drawing_height,
                &mut self.colors,
            ) {
                self.revision += 1;
            }
        }
        log::info!(
            "{} Standard-Ursprünge gesetzt",
            self.store.origin_count()
        );
    }

    /// Markiert eine Mutation des Stores.
    pub fn mark_changed(&mut self) {
        self.revision += 1;
    }

    /// Anzahl der Relationen (für UI-Anzeige)
    pub fn relative_count(&self) -> usize {
        self.store.relative_count()
    }
}
