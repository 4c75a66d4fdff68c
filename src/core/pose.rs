//! Pose (Position + Orientierung) im Pixel-Raum eines Level-Bildes.

use glam::DVec2;

/// Position und Blickrichtung auf einem Level-Bild.
///
/// Pixel-Raum: Ursprung oben links, Y wächst nach unten.
/// `orientation` ist der Winkel in Radiant, gemessen von der +X-Achse
/// so wie `atan2(dy, dx)` ihn im Pixel-Raum liefert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Position in Pixel-Koordinaten
    pub position: DVec2,
    /// Orientierung in Radiant
    pub orientation: f64,
}

impl Pose {
    /// Erstellt eine Pose aus Position und Winkel.
    pub fn new(position: DVec2, orientation: f64) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Pose an `position`, ausgerichtet auf `facing_point`.
    pub fn facing(position: DVec2, facing_point: DVec2) -> Self {
        Self::new(position, heading(position, facing_point))
    }

    /// Winkel von der Pose-Position zu einem beliebigen Punkt.
    pub fn heading_to(&self, point: DVec2) -> f64 {
        heading(self.position, point)
    }

    /// Transformiert einen Pixel-Punkt in das lokale Achsensystem der Pose.
    ///
    /// Lokale +X-Achse = Blickrichtung der Pose.
    pub fn to_local(&self, point: DVec2) -> DVec2 {
        let delta = point - self.position;
        let (sin, cos) = self.orientation.sin_cos();
        DVec2::new(cos * delta.x + sin * delta.y, -sin * delta.x + cos * delta.y)
    }

    /// Endpunkt der lokalen Achse mit Länge `length` (für Achsen-Darstellung).
    pub fn axis_tip(&self, length: f64) -> DVec2 {
        self.position + DVec2::from_angle(self.orientation) * length
    }

    /// Prüft, ob `point` innerhalb von `radius` um die Pose-Position liegt.
    pub fn hits_position(&self, point: DVec2, radius: f64) -> bool {
        self.position.distance(point) <= radius
    }

    /// Prüft, ob `point` im schmalen Band entlang der lokalen +X-Achse liegt.
    ///
    /// Band: `0 < local_x < length` und `|local_y| < half_width`.
    pub fn hits_orientation_handle(&self, point: DVec2, length: f64, half_width: f64) -> bool {
        let local = self.to_local(point);
        local.x > 0.0 && local.x < length && local.y.abs() < half_width
    }
}

/// Winkel `atan2(to.y - from.y, to.x - from.x)` im Pixel-Raum.
pub fn heading(from: DVec2, to: DVec2) -> f64 {
    (to.y - from.y).atan2(to.x - from.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_facing_uses_atan2_in_pixel_space() {
        let pose = Pose::facing(DVec2::new(10.0, 10.0), DVec2::new(10.0, 20.0));
        // Y wächst nach unten → "nach unten schauen" ist +PI/2
        assert_relative_eq!(pose.orientation, FRAC_PI_2);
    }

    #[test]
    fn test_to_local_rotates_into_pose_frame() {
        let pose = Pose::new(DVec2::new(5.0, 5.0), FRAC_PI_2);
        let local = pose.to_local(DVec2::new(5.0, 15.0));
        assert_relative_eq!(local.x, 10.0, epsilon = 1e-12);
        assert_relative_eq!(local.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_hits_position_within_radius() {
        let pose = Pose::new(DVec2::new(100.0, 100.0), 0.0);
        assert!(pose.hits_position(DVec2::new(103.0, 104.0), 5.0));
        assert!(!pose.hits_position(DVec2::new(104.0, 104.0), 5.0));
    }

    #[test]
    fn test_orientation_handle_band() {
        let pose = Pose::new(DVec2::new(0.0, 0.0), 0.0);
        assert!(pose.hits_orientation_handle(DVec2::new(10.0, 2.0), 22.0, 3.0));
        assert!(!pose.hits_orientation_handle(DVec2::new(-1.0, 0.0), 22.0, 3.0));
        assert!(!pose.hits_orientation_handle(DVec2::new(10.0, 3.5), 22.0, 3.0));
        assert!(!pose.hits_orientation_handle(DVec2::new(23.0, 0.0), 22.0, 3.0));
    }

    #[test]
    fn test_orientation_handle_follows_rotation() {
        let pose = Pose::new(DVec2::new(0.0, 0.0), FRAC_PI_2);
        // Band zeigt jetzt entlang +Y (nach unten im Bild)
        assert!(pose.hits_orientation_handle(DVec2::new(1.0, 15.0), 22.0, 3.0));
        assert!(!pose.hits_orientation_handle(DVec2::new(15.0, 1.0), 22.0, 3.0));
    }

    #[test]
    fn test_axis_tip() {
        let pose = Pose::new(DVec2::new(1.0, 1.0), 0.0);
        let tip = pose.axis_tip(20.0);
        assert_relative_eq!(tip.x, 21.0);
        assert_relative_eq!(tip.y, 1.0);
    }
}
