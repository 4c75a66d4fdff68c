//! Umrechnung von Pixel-Posen in den physikalischen Export-Frame.
//!
//! Export-Frame: rechtshändig, Y nach oben, Yaw nach Rechte-Hand-Regel um +Z.
//! Pixel-Raum: Y nach unten. Daraus folgen der Vorzeichenwechsel auf Y und
//! auf allen Winkeln.

use super::pose::Pose;
use glam::{DQuat, DVec2, DVec3, EulerRot};

/// Starre Transformation eines Ziel-Ursprungs relativ zum Referenz-Ursprung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelativeTransform {
    /// Versatz in Metern im Frame der Referenz (z = 0)
    pub position: DVec3,
    /// Relative Drehung um +Z
    pub orientation: DQuat,
    /// Relativer Yaw in Radiant (Eingang der Quaternion)
    pub yaw: f64,
}

/// Berechnet die Transformation von `target` relativ zu `reference`.
///
/// Beide Posen liegen im Pixel-Raum des Referenz-Levels, `meters_per_pixel`
/// ist dessen Maßstab.
pub fn relative_transform(
    reference: &Pose,
    target: &Pose,
    meters_per_pixel: f64,
) -> RelativeTransform {
    let yaw = -reference.orientation;
    let offset = offset_in_reference(reference, target.position, meters_per_pixel);
    let diff_yaw = -target.orientation - yaw;

    RelativeTransform {
        position: DVec3::new(offset.x, offset.y, 0.0),
        orientation: yaw_quaternion(diff_yaw),
        yaw: diff_yaw,
    }
}

/// Rechnet einen Pixel-Punkt in Meter um (Anzeige am Mauszeiger).
///
/// Mit Referenz: Versatz im Frame des Referenz-Ursprungs.
/// Ohne Referenz: reine Skalierung mit Y-Flip, keine Drehung.
pub fn pixel_to_metric(point: DVec2, reference: Option<&Pose>, meters_per_pixel: f64) -> DVec2 {
    match reference {
        Some(reference) => offset_in_reference(reference, point, meters_per_pixel),
        None => DVec2::new(point.x * meters_per_pixel, -point.y * meters_per_pixel),
    }
}

/// Quaternion für reine Drehung um +Z (roll = pitch = 0).
pub fn yaw_quaternion(yaw: f64) -> DQuat {
    DQuat::from_euler(EulerRot::ZYX, yaw, 0.0, 0.0)
}

/// Metrischer Versatz von `point` im gedrehten Frame von `reference`.
fn offset_in_reference(reference: &Pose, point: DVec2, meters_per_pixel: f64) -> DVec2 {
    let dx = (point.x - reference.position.x) * meters_per_pixel;
    let dy = -(point.y - reference.position.y) * meters_per_pixel;

    let yaw = -reference.orientation;
    let (sin, cos) = (-yaw).sin_cos();
    DVec2::new(cos * dx - sin * dy, sin * dx + cos * dy)
}
