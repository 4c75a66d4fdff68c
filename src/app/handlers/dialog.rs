//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::AppState;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Schließt die blockierende Meldung.
pub fn dismiss_notification(state: &mut AppState) {
    state.ui.notification = None;
}
