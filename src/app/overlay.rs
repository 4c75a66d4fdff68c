//! Transiente Overlays der Interaktion (Positions-Marker, Richtungs-Vorschau, Drag-Handle).
//!
//! Die Session besitzt alle Overlays exklusiv. Jeder Zustand der
//! State-Machine, der Overlays erzeugt, zerstört sie beim Verlassen wieder.

use crate::shared::{DrawIntent, ViewSlot};
use std::collections::BTreeMap;

/// Handle auf ein Overlay. Nach `destroy` ungültig.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(u64);

/// Ein Overlay-Element in einer Ansicht.
#[derive(Debug, Clone, PartialEq)]
struct Overlay {
    /// Ansicht, in der das Overlay gezeichnet wird
    view: ViewSlot,
    /// Form (Pixel-Koordinaten des Level-Bildes)
    shape: DrawIntent,
}

/// Menge der aktuell lebenden Overlays.
#[derive(Debug, Clone, Default)]
pub struct OverlaySet {
    next_id: u64,
    items: BTreeMap<OverlayId, Overlay>,
}

impl OverlaySet {
    /// Erstellt eine leere Overlay-Menge.
    pub fn new() -> Self {
        Self::default()
    }

    /// Legt ein Overlay an und gibt dessen Handle zurück.
    pub fn create(&mut self, view: ViewSlot, shape: DrawIntent) -> OverlayId {
        let id = OverlayId(self.next_id);
        self.next_id += 1;
        self.items.insert(id, Overlay { view, shape });
        id
    }

    /// Ersetzt die Form eines lebenden Overlays.
    pub fn update(&mut self, id: OverlayId, shape: DrawIntent) -> bool {
        match self.items.get_mut(&id) {
            Some(overlay) => {
                overlay.shape = shape;
                true
            }
            None => false,
        }
    }

    /// Zerstört ein Overlay.
    pub fn destroy(&mut self, id: OverlayId) -> bool {
        self.items.remove(&id).is_some()
    }

    /// Zerstört alle Overlays.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Alle Overlay-Formen einer Ansicht in Erzeugungsreihenfolge.
    pub fn shapes_in(&self, view: ViewSlot) -> impl Iterator<Item = &DrawIntent> {
        self.items
            .values()
            .filter(move |overlay| overlay.view == view)
            .map(|overlay| &overlay.shape)
    }

    /// Anzahl lebender Overlays.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Gibt `true` zurück, wenn kein Overlay lebt.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
