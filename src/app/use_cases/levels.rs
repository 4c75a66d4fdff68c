//! Use-Case: Level-Auswahl der beiden Ansichten.

use crate::app::AppState;
use crate::shared::ViewSlot;

/// Setzt das Level einer Ansicht. Ungültige Indizes werden abgelehnt.
///
/// Laufende Gesten gehören zum alten Level und werden verworfen.
pub fn select_level(state: &mut AppState, slot: ViewSlot, level_index: usize) {
    if level_index >= state.building.level_count() {
        log::warn!(
            "Level-Index {} außerhalb des Gebäudes ({} Levels), Auswahl ignoriert",
            level_index,
            state.building.level_count()
        );
        return;
    }

    state.session.reset();
    state.view.set_level(slot, level_index);
    log::info!("{}: zeigt jetzt Level {}", slot.label(), level_index);
}
