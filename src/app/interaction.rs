//! Pointer-Interaktion: State-Machine für Ursprung setzen, relative Pose
//! setzen sowie Verschieben und Drehen bestehender relativer Posen.
//!
//! Aufgeteilt in:
//! - `session` — transienter Zustand (Modus, Overlays, Label, Cursor)
//! - `hit_test` — Treffer auf relative Posen (Position / Dreh-Band)
//! - `lifecycle` — Übergänge bei Press / Move / Release

mod lifecycle;
mod session;
#[cfg(test)]
mod tests;

pub use hit_test::{pick_relative_pose, HitKind, PoseHit};
pub use lifecycle::{handle_pointer, missing_origin_message, MSG_BOTH_ORIGINS_MISSING};
pub use session::{
    FloatingLabel, GestureKind, InteractionMode, InteractionSession, MouseStatus, PendingGesture,
    PoseGrab,
};

use crate::shared::ViewSlot;
use glam::DVec2;

/// Art eines Pointer-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    /// Maustaste gedrückt
    Press,
    /// Maus bewegt
    Move,
    /// Maustaste losgelassen
    Release,
}

/// Ein Pointer-Event in Pixel-Koordinaten der betroffenen Ansicht.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Event-Art
    pub kind: PointerEventKind,
    /// Betroffene Ansicht (None = außerhalb beider Ansichten)
    pub view: Option<ViewSlot>,
    /// Position im Pixel-Raum des Level-Bildes
    pub position: DVec2,
    /// Modifier (Strg) gedrückt
    pub ctrl: bool,
}

impl PointerEvent {
    /// Press-Event in einer Ansicht.
    pub fn press(view: ViewSlot, position: DVec2, ctrl: bool) -> Self {
        Self {
            kind: PointerEventKind::Press,
            view: Some(view),
            position,
            ctrl,
        }
    }

    /// Move-Event in einer Ansicht.
    pub fn moved(view: ViewSlot, position: DVec2) -> Self {
        Self {
            kind: PointerEventKind::Move,
            view: Some(view),
            position,
            ctrl: false,
        }
    }

    /// Release-Event in einer Ansicht.
    pub fn release(view: ViewSlot, position: DVec2) -> Self {
        Self {
            kind: PointerEventKind::Release,
            view: Some(view),
            position,
            ctrl: false,
        }
    }
}
