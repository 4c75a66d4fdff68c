//! Pointer-Input der beiden Level-Ansichten → AppIntent.

use super::ImageFit;
use crate::app::AppIntent;
use crate::shared::ViewSlot;
use glam::DVec2;

/// Pointer-Zustand eines Frames (aus egui gelesen).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerSample {
    /// Bildschirmposition (None = Pointer außerhalb des Fensters)
    pub hover_pos: Option<egui::Pos2>,
    /// Primärtaste in diesem Frame gedrückt
    pub pressed: bool,
    /// Primärtaste in diesem Frame losgelassen
    pub released: bool,
    /// Strg gehalten
    pub ctrl: bool,
}

impl PointerSample {
    /// Liest den Pointer-Zustand aus dem egui-Kontext.
    pub fn from_context(ctx: &egui::Context) -> Self {
        ctx.input(|i| Self {
            hover_pos: i.pointer.hover_pos(),
            pressed: i.pointer.primary_pressed(),
            released: i.pointer.primary_released(),
            ctrl: i.modifiers.ctrl,
        })
    }
}

/// Merkt sich, wo der Pointer im letzten Frame war.
#[derive(Debug, Default)]
pub struct InputState {
    last_view: Option<ViewSlot>,
    last_pixel: Option<DVec2>,
}

impl InputState {
    /// Erstellt einen leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Liegt der Pointer aktuell über einer Ansicht?
    pub fn is_over_view(&self) -> bool {
        self.last_view.is_some()
    }

    /// Übersetzt einen Pointer-Sample in AppIntents.
    ///
    /// `fits` enthält die Einpassung jeder Ansicht aus dem aktuellen Frame.
    /// Verlässt der Pointer beide Ansichten, entsteht genau ein `PointerLeft`.
    pub fn collect_pointer_intents(
        &mut self,
        sample: &PointerSample,
        fits: &[(ViewSlot, Option<ImageFit>)],
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        let located = sample.hover_pos.and_then(|pos| {
            fits.iter().find_map(|(slot, fit)| {
                fit.filter(|fit| fit.contains(pos))
                    .map(|fit| (*slot, fit.to_pixel(pos)))
            })
        });

        let Some((view, pixel_pos)) = located else {
            if self.last_view.take().is_some() {
                events.push(AppIntent::PointerLeft);
            }
            self.last_pixel = None;
            return events;
        };

        if self.last_view != Some(view) || self.last_pixel != Some(pixel_pos) {
            events.push(AppIntent::PointerMoved {
                view: Some(view),
                pixel_pos,
                ctrl: sample.ctrl,
            });
        }
        if sample.pressed {
            events.push(AppIntent::PointerPressed {
                view: Some(view),
                pixel_pos,
                ctrl: sample.ctrl,
            });
        }
        if sample.released {
            events.push(AppIntent::PointerReleased {
                view: Some(view),
                pixel_pos,
            });
        }

        self.last_view = Some(view);
        self.last_pixel = Some(pixel_pos);
        events
    }
}
