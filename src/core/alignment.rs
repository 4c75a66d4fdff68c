//! Alignment-Store: Ursprung je Level und relative Posen je Level-Paar.
//!
//! Alle `set_*`/`add_*`-Operationen sind create-or-reject: ein bestehender
//! Eintrag wird nie still überschrieben.

use super::color::{ColorGenerator, LevelColor};
use super::pose::Pose;
use glam::DVec2;
use std::collections::BTreeMap;

/// Ursprung eines Levels (existiert erst, wenn der Ursprung gesetzt wurde).
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentInfo {
    /// Index des Levels im Gebäude
    pub level_index: usize,
    /// Name des Levels (für Export und Anzeige)
    pub level_name: String,
    /// Referenz-Pose im eigenen Bild
    pub origin: Pose,
    /// Anzeige-Farbe
    pub color: LevelColor,
}

/// Pose des Ziel-Ursprungs, markiert auf dem Bild des Quell-Levels.
#[derive(Debug, Clone, PartialEq)]
pub struct RelativePose {
    /// Name des Ziel-Levels
    pub target_name: String,
    /// Pose im Pixel-Raum des Quell-Levels
    pub pose: Pose,
}

/// Ursprünge und flache Relationstabelle `(from, to) → RelativePose`.
///
/// `BTreeMap` hält die Iteration nach Level-Index sortiert, damit der Export
/// unabhängig von der Eingabereihenfolge stabil bleibt.
#[derive(Debug, Clone, Default)]
pub struct AlignmentStore {
    origins: BTreeMap<usize, AlignmentInfo>,
    relatives: BTreeMap<(usize, usize), RelativePose>,
}

impl AlignmentStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Abfragen ────────────────────────────────────────────────

    /// Prüft, ob für `level` ein Ursprung gesetzt ist.
    pub fn has_origin(&self, level: usize) -> bool {
        self.origins.contains_key(&level)
    }

    /// Prüft, ob die Relation `(from, to)` existiert. `false` ohne Ursprung auf `from`.
    pub fn has_relative(&self, from: usize, to: usize) -> bool {
        self.has_origin(from) && self.relatives.contains_key(&(from, to))
    }

    /// Ursprung eines Levels.
    pub fn origin(&self, level: usize) -> Option<&AlignmentInfo> {
        self.origins.get(&level)
    }

    /// Alle Ursprünge, sortiert nach Level-Index.
    pub fn origins(&self) -> impl Iterator<Item = &AlignmentInfo> {
        self.origins.values()
    }

    /// Relative Pose `(from, to)`.
    pub fn relative(&self, from: usize, to: usize) -> Option<&RelativePose> {
        self.relatives.get(&(from, to))
    }

    /// Alle Relationen mit Quelle `from`, sortiert nach Ziel-Index.
    pub fn relatives_from(&self, from: usize) -> impl Iterator<Item = (usize, &RelativePose)> {
        self.relatives
            .range((from, usize::MIN)..=(from, usize::MAX))
            .map(|(&(_, to), relative)| (to, relative))
    }

    /// Anzahl gesetzter Ursprünge.
    pub fn origin_count(&self) -> usize {
        self.origins.len()
    }

    /// Anzahl der Relationen.
    pub fn relative_count(&self) -> usize {
        self.relatives.len()
    }

    // ── Anlegen (create-or-reject) ──────────────────────────────

    /// Setzt den Ursprung in die Bildmitte mit Orientierung 0.
    ///
    /// Gibt `false` zurück (ohne Mutation), wenn bereits ein Ursprung existiert.
    /// Eine Farbe wird nur bei Erfolg gezogen.
    pub fn set_origin_default(
        &mut self,
        level: usize,
        level_name: &str,
        width: u32,
        height: u32,
        colors: &mut ColorGenerator,
    ) -> bool {
        if self.has_origin(level) {
            return false;
        }
        let center = DVec2::new(f64::from(width) / 2.0, f64::from(height) / 2.0);
        self.insert_origin(level, level_name, Pose::new(center, 0.0), colors.next_color());
        true
    }

    /// Setzt den Ursprung an `position`, ausgerichtet auf `facing_point`.
    ///
    /// Gibt `false` zurück (ohne Mutation), wenn bereits ein Ursprung existiert.
    pub fn set_origin(
        &mut self,
        level: usize,
        level_name: &str,
        position: DVec2,
        facing_point: DVec2,
        color: LevelColor,
    ) -> bool {
        if self.has_origin(level) {
            return false;
        }
        self.insert_origin(level, level_name, Pose::facing(position, facing_point), color);
        true
    }

    /// Legt die Relation `(from, to)` an.
    ///
    /// Gibt `false` zurück, wenn `from` keinen Ursprung hat oder die Relation
    /// bereits existiert. Die bestehende Relation bleibt dabei unverändert.
    pub fn add_relative(
        &mut self,
        from: usize,
        to: usize,
        target_name: &str,
        position: DVec2,
        facing_point: DVec2,
    ) -> bool {
        if !self.has_origin(from) || self.relatives.contains_key(&(from, to)) {
            return false;
        }
        self.relatives.insert(
            (from, to),
            RelativePose {
                target_name: target_name.to_string(),
                pose: Pose::facing(position, facing_point),
            },
        );
        true
    }

    fn insert_origin(&mut self, level: usize, level_name: &str, origin: Pose, color: LevelColor) {
        self.origins.insert(
            level,
            AlignmentInfo {
                level_index: level,
                level_name: level_name.to_string(),
                origin,
                color,
            },
        );
    }

    // ── Mutation bestehender Relationen ─────────────────────────

    /// Verschiebt eine bestehende Relation (Orientierung bleibt erhalten).
    pub fn set_relative_position(&mut self, from: usize, to: usize, position: DVec2) -> bool {
        let Some(relative) = self.relatives.get_mut(&(from, to)) else {
            return false;
        };
        relative.pose.position = position;
        true
    }

    /// Setzt die Orientierung einer bestehenden Relation (Position bleibt erhalten).
    pub fn set_relative_orientation(&mut self, from: usize, to: usize, orientation: f64) -> bool {
        let Some(relative) = self.relatives.get_mut(&(from, to)) else {
            return false;
        };
        relative.pose.orientation = orientation;
        true
    }
}
