//! Handler für Pointer-Events der beiden Ansichten.

use crate::app::interaction::{self, PointerEvent};
use crate::app::AppState;

/// Leitet ein Pointer-Event an die Interaktions-State-Machine weiter.
pub fn handle(state: &mut AppState, event: PointerEvent) {
    interaction::handle_pointer(state, event);
}

/// Verwirft laufende Gesten, Overlays und das Koordinaten-Label.
pub fn reset(state: &mut AppState) {
    state.session.reset();
}
