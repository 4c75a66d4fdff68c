//! Farbvergabe für Level-Ursprünge.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Anzeige-Farbe eines Levels (RGBA, 0–255).
///
/// Reines Anzeige-Merkmal, nicht Teil des Exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelColor(pub [u8; 4]);

impl LevelColor {
    /// Neutrale Farbe für Overlays ohne Level-Bezug.
    pub const NEUTRAL: LevelColor = LevelColor([200, 200, 200, 255]);

    /// Gibt die RGBA-Komponenten zurück.
    pub fn rgba(self) -> [u8; 4] {
        self.0
    }
}

/// Erzeugt Level-Farben aus einem explizit gesetzten Seed.
///
/// Gleicher Seed → gleiche Farbfolge.
#[derive(Debug, Clone)]
pub struct ColorGenerator {
    rng: StdRng,
}

impl ColorGenerator {
    /// Untergrenze je Farbkanal, damit Marker auf hellen Plänen sichtbar bleiben.
    const CHANNEL_MIN: u8 = 40;
    /// Obergrenze je Farbkanal.
    const CHANNEL_MAX: u8 = 230;

    /// Erstellt einen Generator mit festem Seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Liefert die nächste Farbe der Folge.
    pub fn next_color(&mut self) -> LevelColor {
        let mut channel = || self.rng.random_range(Self::CHANNEL_MIN..=Self::CHANNEL_MAX);
        LevelColor([channel(), channel(), channel(), 255])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = ColorGenerator::new(7);
        let mut b = ColorGenerator::new(7);
        for _ in 0..5 {
            assert_eq!(a.next_color(), b.next_color());
        }
    }

    #[test]
    fn test_colors_are_opaque_and_in_range() {
        let mut generator = ColorGenerator::new(1);
        for _ in 0..32 {
            let [r, g, b, a] = generator.next_color().rgba();
            assert_eq!(a, 255);
            for c in [r, g, b] {
                assert!((40..=230).contains(&c));
            }
        }
    }
}
