//! Zeichnet eine Level-Ansicht: Bild, Ursprünge, relative Posen, Overlays.

use crate::core::{LevelColor, Pose};
use crate::shared::{DrawIntent, ViewScene};
use glam::DVec2;
use std::f64::consts::FRAC_PI_2;

const STROKE_WIDTH: f32 = 2.0;
const MIN_SCREEN_RADIUS: f32 = 2.0;
const LABEL_FONT_SIZE: f32 = 12.0;

/// Einpassung des Level-Bildes in den verfügbaren Bereich (Seitenverhältnis bleibt).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageFit {
    /// Bildschirmbereich des Bildes
    pub image_rect: egui::Rect,
    /// Bildschirm-Punkte pro Bild-Pixel
    pub scale: f32,
}

impl ImageFit {
    /// Passt ein Bild der Größe `drawing_size` zentriert in `view_rect` ein.
    pub fn new(view_rect: egui::Rect, drawing_size: [u32; 2]) -> Option<Self> {
        let width = drawing_size[0] as f32;
        let height = drawing_size[1] as f32;
        if width <= 0.0 || height <= 0.0 || view_rect.width() <= 0.0 || view_rect.height() <= 0.0
        {
            return None;
        }

        let scale = (view_rect.width() / width).min(view_rect.height() / height);
        let image_rect =
            egui::Rect::from_center_size(view_rect.center(), egui::vec2(width, height) * scale);
        Some(Self { image_rect, scale })
    }

    /// Bild-Pixel → Bildschirm.
    pub fn to_screen(&self, pixel: DVec2) -> egui::Pos2 {
        self.image_rect.min + egui::vec2(pixel.x as f32, pixel.y as f32) * self.scale
    }

    /// Bildschirm → Bild-Pixel.
    pub fn to_pixel(&self, pos: egui::Pos2) -> DVec2 {
        let delta = (pos - self.image_rect.min) / self.scale;
        DVec2::new(f64::from(delta.x), f64::from(delta.y))
    }

    /// Liegt `pos` auf dem Bild?
    pub fn contains(&self, pos: egui::Pos2) -> bool {
        self.image_rect.contains(pos)
    }
}

/// Belegt den restlichen Platz von `ui` und zeichnet die Ansicht hinein.
///
/// Gibt die Einpassung zurück, über die Pointer-Positionen in Bild-Pixel
/// umgerechnet werden (None, wenn kein Level angezeigt wird).
pub fn paint_level_view(
    ui: &mut egui::Ui,
    scene: &ViewScene,
    image_uri: Option<&str>,
) -> Option<ImageFit> {
    let (rect, _response) =
        ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, egui::CornerRadius::ZERO, egui::Color32::from_gray(24));

    let fit = scene
        .level_index
        .and_then(|_| ImageFit::new(rect, scene.drawing_size));
    let Some(fit) = fit else {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "Kein Level",
            egui::FontId::proportional(18.0),
            egui::Color32::GRAY,
        );
        return None;
    };

    match image_uri {
        Some(uri) => {
            egui::Image::new(uri.to_string()).paint_at(ui, fit.image_rect);
        }
        None => {
            painter.rect_filled(
                fit.image_rect,
                egui::CornerRadius::ZERO,
                egui::Color32::from_gray(48),
            );
        }
    }

    for intent in &scene.intents {
        paint_intent(&painter, &fit, intent);
    }

    Some(fit)
}

fn paint_intent(painter: &egui::Painter, fit: &ImageFit, intent: &DrawIntent) {
    match intent {
        DrawIntent::Circle {
            center,
            radius,
            color,
        } => {
            let radius = (*radius as f32 * fit.scale).max(MIN_SCREEN_RADIUS);
            painter.circle_stroke(
                fit.to_screen(*center),
                radius,
                egui::Stroke::new(STROKE_WIDTH, to_color32(*color)),
            );
        }
        DrawIntent::Axes {
            origin,
            angle,
            length,
            color,
        } => {
            let pose = Pose::new(*origin, *angle);
            let start = fit.to_screen(*origin);
            let x_tip = fit.to_screen(pose.axis_tip(*length));
            // Metrisches +Y zeigt im Bild nach oben
            let y_tip = fit.to_screen(Pose::new(*origin, *angle - FRAC_PI_2).axis_tip(*length));
            let color = to_color32(*color);
            painter.line_segment([start, x_tip], egui::Stroke::new(STROKE_WIDTH, color));
            painter.line_segment(
                [start, y_tip],
                egui::Stroke::new(STROKE_WIDTH * 0.5, color.gamma_multiply(0.6)),
            );
        }
        DrawIntent::Label { anchor, text } => {
            painter.text(
                fit.to_screen(*anchor),
                egui::Align2::LEFT_BOTTOM,
                text,
                egui::FontId::monospace(LABEL_FONT_SIZE),
                egui::Color32::WHITE,
            );
        }
    }
}

fn to_color32(color: LevelColor) -> egui::Color32 {
    let [r, g, b, a] = color.rgba();
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(200.0, 100.0))
    }

    #[test]
    fn test_fit_centers_and_scales_image() {
        let fit = ImageFit::new(view_rect(), [50, 50]).expect("Einpassung");
        assert_eq!(fit.scale, 2.0);
        assert_eq!(fit.image_rect.min, egui::pos2(50.0, 0.0));
        assert_eq!(fit.image_rect.max, egui::pos2(150.0, 100.0));
    }

    #[test]
    fn test_screen_pixel_conversion() {
        let fit = ImageFit::new(view_rect(), [50, 50]).expect("Einpassung");

        assert_eq!(fit.to_pixel(egui::pos2(60.0, 10.0)), DVec2::new(5.0, 5.0));
        assert_eq!(fit.to_screen(DVec2::new(5.0, 5.0)), egui::pos2(60.0, 10.0));
        assert!(fit.contains(egui::pos2(60.0, 10.0)));
        assert!(!fit.contains(egui::pos2(10.0, 10.0)));
    }

    #[test]
    fn test_empty_drawing_has_no_fit() {
        assert!(ImageFit::new(view_rect(), [0, 50]).is_none());
    }
}
