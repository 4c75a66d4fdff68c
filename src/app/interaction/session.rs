//! Transienter Zustand einer Interaktions-Session.

use crate::app::overlay::{OverlayId, OverlaySet};
use crate::core::LevelColor;
use crate::shared::{CursorShape, ViewSlot};
use glam::DVec2;

/// Grobzustand der Maus (Drag-Modi).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseStatus {
    /// Kein Drag aktiv
    #[default]
    Idle,
    /// Relative Pose wird verschoben
    MovePose,
    /// Relative Pose wird gedreht
    RotatePose,
}

/// Was die laufende Zwei-Klick-Geste anlegt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    /// Ursprung des handelnden Levels
    Origin,
    /// Relative Pose des Partner-Levels auf dem handelnden Level
    Relative { target_level: usize },
}

/// Position gesetzt, Orientierung steht noch aus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingGesture {
    /// Art der Geste
    pub kind: GestureKind,
    /// Ansicht, in der die Geste begann
    pub view: ViewSlot,
    /// Handelndes Level
    pub level: usize,
    /// Erster Klickpunkt (wird zur Position)
    pub clicked_point: DVec2,
    /// Farbe für Vorschau (und Ursprung beim Commit)
    pub color: LevelColor,
    pub(crate) marker: OverlayId,
    pub(crate) preview: Option<OverlayId>,
}

/// Gegriffene relative Pose `(from, to)` während Verschieben/Drehen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseGrab {
    /// Ansicht, in der gegriffen wurde
    pub view: ViewSlot,
    /// Quell-Level der Relation
    pub from: usize,
    /// Ziel-Level der Relation
    pub to: usize,
    pub(crate) handle: OverlayId,
}

/// Zustand der Pointer-State-Machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionMode {
    /// Keine Geste aktiv
    #[default]
    Idle,
    /// Zweiter Klick (Orientierung) ausstehend
    AwaitingOrientation(PendingGesture),
    /// Relative Pose folgt dem Mauszeiger
    MovePose(PoseGrab),
    /// Relative Pose dreht sich zum Mauszeiger
    RotatePose(PoseGrab),
}

/// Koordinaten-Label am Mauszeiger.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingLabel {
    /// Ansicht, die das Label zuletzt besaß
    pub view: ViewSlot,
    /// Ankerpunkt (Pixel-Raum)
    pub anchor: DVec2,
    /// Angezeigter Text (metrische Koordinaten)
    pub text: String,
}

/// Transienter Interaktionszustand, exklusiv von der Session besessen.
#[derive(Debug, Clone, Default)]
pub struct InteractionSession {
    pub(crate) mode: InteractionMode,
    pub(crate) overlays: OverlaySet,
    pub(crate) is_ctrl_pressed: bool,
    pub(crate) label: Option<FloatingLabel>,
    pub(crate) cursor: CursorShape,
}

impl InteractionSession {
    /// Erstellt eine Session im Leerlauf.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktueller Modus.
    pub fn mode(&self) -> &InteractionMode {
        &self.mode
    }

    /// Drag-Status (Move/Rotate) unabhängig von laufenden Gesten.
    pub fn mouse_status(&self) -> MouseStatus {
        match self.mode {
            InteractionMode::MovePose(_) => MouseStatus::MovePose,
            InteractionMode::RotatePose(_) => MouseStatus::RotatePose,
            InteractionMode::Idle | InteractionMode::AwaitingOrientation(_) => MouseStatus::Idle,
        }
    }

    /// Erster Klick einer Geste registriert?
    pub fn is_clicked(&self) -> bool {
        matches!(self.mode, InteractionMode::AwaitingOrientation(_))
    }

    /// Erster Klickpunkt der laufenden Geste.
    pub fn clicked_point(&self) -> Option<DVec2> {
        match self.mode {
            InteractionMode::AwaitingOrientation(gesture) => Some(gesture.clicked_point),
            _ => None,
        }
    }

    /// Farbe der laufenden Geste.
    pub fn pending_color(&self) -> Option<LevelColor> {
        match self.mode {
            InteractionMode::AwaitingOrientation(gesture) => Some(gesture.color),
            _ => None,
        }
    }

    /// Strg beim letzten Event gedrückt?
    pub fn is_ctrl_pressed(&self) -> bool {
        self.is_ctrl_pressed
    }

    /// Aktuelles Koordinaten-Label.
    pub fn label(&self) -> Option<&FloatingLabel> {
        self.label.as_ref()
    }

    /// Gewünschter Mauszeiger.
    pub fn cursor(&self) -> CursorShape {
        self.cursor
    }

    /// Lebende Overlays.
    pub fn overlays(&self) -> &OverlaySet {
        &self.overlays
    }

    /// Verlässt den aktuellen Modus und zerstört dessen Overlays.
    ///
    /// Gibt den verlassenen Modus zurück; danach ist die Session `Idle`.
    pub(crate) fn leave_mode(&mut self) -> InteractionMode {
        let previous = std::mem::take(&mut self.mode);
        match previous {
            InteractionMode::Idle => {}
            InteractionMode::AwaitingOrientation(gesture) => {
                self.overlays.destroy(gesture.marker);
                if let Some(preview) = gesture.preview {
                    self.overlays.destroy(preview);
                }
            }
            InteractionMode::MovePose(grab) | InteractionMode::RotatePose(grab) => {
                self.overlays.destroy(grab.handle);
            }
        }
        previous
    }

    /// Verwirft allen transienten Zustand (Pointer hat beide Ansichten verlassen).
    pub fn reset(&mut self) {
        if self.mode != InteractionMode::Idle {
            log::debug!("Interaktion zurückgesetzt ({:?})", self.mouse_status());
        }
        self.leave_mode();
        // Overlays gehören ausschließlich zu Modi; Reste wären ein Leck.
        self.overlays.clear();
        self.is_ctrl_pressed = false;
        self.label = None;
        self.cursor = CursorShape::Arrow;
    }
}
