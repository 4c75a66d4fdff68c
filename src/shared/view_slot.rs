//! Die beiden Level-Ansichten des Dialogs (shared zwischen App und UI).

/// Eine der beiden gleichzeitig sichtbaren Level-Ansichten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViewSlot {
    /// Linke Ansicht (initial Level 0)
    First,
    /// Rechte Ansicht (initial Level 1)
    Second,
}

impl ViewSlot {
    /// Beide Ansichten in Anzeige-Reihenfolge.
    pub const ALL: [ViewSlot; 2] = [ViewSlot::First, ViewSlot::Second];

    /// Die jeweils andere Ansicht (liefert das Partner-Level).
    pub fn other(self) -> ViewSlot {
        match self {
            ViewSlot::First => ViewSlot::Second,
            ViewSlot::Second => ViewSlot::First,
        }
    }

    /// Kurzname für Logs.
    pub fn label(self) -> &'static str {
        match self {
            ViewSlot::First => "Level 1",
            ViewSlot::Second => "Level 2",
        }
    }
}
