//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Die App erzeugt nur Zeichen-Absichten in Pixel-Koordinaten des jeweiligen
//! Level-Bildes. Wie diese auf den Bildschirm kommen, entscheidet das UI.

use super::ViewSlot;
use crate::core::LevelColor;
use glam::DVec2;

/// Eine einzelne Zeichen-Absicht.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawIntent {
    /// Kreis um einen Punkt
    Circle {
        center: DVec2,
        radius: f64,
        color: LevelColor,
    },
    /// Zwei-Achsen-Anzeige (lokales X entlang `angle`, Y senkrecht dazu)
    Axes {
        origin: DVec2,
        angle: f64,
        length: f64,
        color: LevelColor,
    },
    /// Text an einem Punkt
    Label { anchor: DVec2, text: String },
}

/// Form des Mauszeigers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorShape {
    /// Standard-Pfeil
    #[default]
    Arrow,
    /// Offene Hand über verschiebbaren Zielen
    OpenHand,
}

/// Zeichen-Absichten einer Ansicht.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewScene {
    /// Angezeigtes Level (None = Gebäude hat dieses Level nicht)
    pub level_index: Option<usize>,
    /// Bildgröße des Levels in Pixeln [Breite, Höhe]
    pub drawing_size: [u32; 2],
    /// Zeichen-Absichten in Zeichenreihenfolge
    pub intents: Vec<DrawIntent>,
}

/// Read-only Daten für einen Render-Durchlauf beider Ansichten.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlignScene {
    /// Linke Ansicht
    pub first: ViewScene,
    /// Rechte Ansicht
    pub second: ViewScene,
    /// Gewünschter Mauszeiger
    pub cursor: CursorShape,
    /// Blockierende Meldung (modal anzeigen)
    pub notification: Option<String>,
}

impl AlignScene {
    /// Gibt die Szene einer Ansicht zurück.
    pub fn view(&self, slot: ViewSlot) -> &ViewScene {
        match slot {
            ViewSlot::First => &self.first,
            ViewSlot::Second => &self.second,
        }
    }

    /// Gibt die Szene einer Ansicht veränderbar zurück.
    pub fn view_mut(&mut self, slot: ViewSlot) -> &mut ViewScene {
        match slot {
            ViewSlot::First => &mut self.first,
            ViewSlot::Second => &mut self.second,
        }
    }
}
