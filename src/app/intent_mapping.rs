//! Mapping von UI-Intents auf mutierende App-Commands.

use super::interaction::{PointerEvent, PointerEventKind};
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed {
            view,
            pixel_pos,
            ctrl,
        } => vec![AppCommand::HandlePointer {
            event: PointerEvent {
                kind: PointerEventKind::Press,
                view,
                position: pixel_pos,
                ctrl,
            },
        }],
        AppIntent::PointerMoved {
            view,
            pixel_pos,
            ctrl,
        } => vec![AppCommand::HandlePointer {
            event: PointerEvent {
                kind: PointerEventKind::Move,
                view,
                position: pixel_pos,
                ctrl,
            },
        }],
        AppIntent::PointerReleased { view, pixel_pos } => vec![AppCommand::HandlePointer {
            event: PointerEvent {
                kind: PointerEventKind::Release,
                view,
                position: pixel_pos,
                ctrl: false,
            },
        }],
        AppIntent::PointerLeft => vec![AppCommand::ResetInteraction],
        AppIntent::LevelSelected { slot, level_index } => {
            if state.view.level(slot) == level_index {
                Vec::new()
            } else {
                // Laufende Geste gehört zum alten Level → vorher verwerfen
                vec![
                    AppCommand::ResetInteraction,
                    AppCommand::SelectLevel { slot, level_index },
                ]
            }
        }
        AppIntent::ExportRequested => vec![AppCommand::RequestExportDialog],
        AppIntent::ExportPathSelected { path } => vec![AppCommand::ExportAlignment { path }],
        AppIntent::NotificationDismissed => vec![AppCommand::DismissNotification],
        AppIntent::CancelRequested => vec![AppCommand::RequestExit],
    }
}
