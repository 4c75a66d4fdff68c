//! Handler für die Level-Auswahl der Ansichten.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::ViewSlot;

/// Zeigt `level_index` in der Ansicht `slot`.
pub fn select_level(state: &mut AppState, slot: ViewSlot, level_index: usize) {
    use_cases::levels::select_level(state, slot, level_index);
}
