//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::AlignScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Pointer ===
            AppCommand::HandlePointer { event } => handlers::pointer::handle(state, event),
            AppCommand::ResetInteraction => handlers::pointer::reset(state),

            // === Ansichten ===
            AppCommand::SelectLevel { slot, level_index } => {
                handlers::levels::select_level(state, slot, level_index)
            }

            // === Export ===
            AppCommand::RequestExportDialog => handlers::export::request_dialog(state),
            AppCommand::ExportAlignment { path } => handlers::export::export(state, path)?,

            // === Dialoge & Steuerung ===
            AppCommand::DismissNotification => handlers::dialog::dismiss_notification(state),
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene für den aktuellen Frame.
    pub fn build_render_scene(&self, state: &AppState) -> AlignScene {
        render_scene::build(state)
    }
}
